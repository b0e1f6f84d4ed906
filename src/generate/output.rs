/// Buffer of rendered declarations that applies the separator rule: one
/// blank line between declarations, none between consecutive string
/// constants so related constants stay visually adjacent.
#[derive(Debug, Default)]
pub struct Output {
    chunks: Vec<Chunk>,
}

#[derive(Debug)]
struct Chunk {
    text: String,
    string_const: bool,
}

impl Output {
    pub fn new() -> Self {
        Self { chunks: Vec::new() }
    }

    pub fn push(&mut self, text: String, string_const: bool) {
        self.chunks.push(Chunk { text, string_const });
    }

    /// Join the accumulated declarations and normalize to exactly one
    /// trailing newline. Empty input yields a bare newline.
    pub fn finish(self) -> String {
        let mut out = String::new();
        for (i, chunk) in self.chunks.iter().enumerate() {
            out.push_str(&chunk.text);
            out.push('\n');

            let grouped = chunk.string_const
                && self.chunks.get(i + 1).map(|next| next.string_const).unwrap_or(false);
            if !grouped {
                out.push('\n');
            }
        }

        format!("{}\n", out.trim_matches('\n'))
    }
}
