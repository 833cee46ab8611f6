use encoding_rs::{CoderResult, Decoder, UTF_8};

/// 增量 UTF-8 解码器：被网络分块截断的多字节字符留到下一块再解码，非法序列替换为 U+FFFD。
pub(crate) struct Utf8ChunkDecoder {
    decoder: Decoder,
}

impl Default for Utf8ChunkDecoder {
    fn default() -> Self {
        Self {
            decoder: UTF_8.new_decoder(),
        }
    }
}

impl Utf8ChunkDecoder {
    pub(crate) fn decode(&mut self, chunk: &[u8]) -> String {
        self.decode_into(chunk, false)
    }

    /// 响应体结束时调用，剩余字节按有损方式输出
    pub(crate) fn finish(&mut self) -> String {
        self.decode_into(&[], true)
    }

    fn decode_into(&mut self, mut chunk: &[u8], last: bool) -> String {
        let mut out = String::new();

        loop {
            let needed = self
                .decoder
                .max_utf8_buffer_length(chunk.len())
                .unwrap_or(chunk.len().saturating_mul(3).saturating_add(16));
            out.reserve(needed);

            let (result, read, _) = self.decoder.decode_to_string(chunk, &mut out, last);
            chunk = &chunk[read..];

            match result {
                CoderResult::InputEmpty => break,
                CoderResult::OutputFull => continue,
            }
        }

        out
    }
}
