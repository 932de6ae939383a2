use vocab2doc::format::{Dialect, TextFormatter};
use vocab2doc::{InlineRenderer, ParagraphMode, RenderOptions};

#[derive(Debug, Clone)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    fn next_below(&mut self, bound: usize) -> usize {
        ((self.next_u64() >> 33) % bound as u64) as usize
    }
}

const ALPHABET: &[&str] = &[
    "a", "b", " ", "\"", "\n", "\r\n", "\r", "&", "<", ">", "'", "é", "\u{2014}", "\u{201c}",
];

fn random_text(rng: &mut Lcg) -> String {
    let len = rng.next_below(24);
    (0..len)
        .map(|_| ALPHABET[rng.next_below(ALPHABET.len())])
        .collect()
}

#[test]
fn randomized_paragraph_tags_are_balanced() {
    let mut rng = Lcg::new(0x5EED_2026_1019);
    let renderer = InlineRenderer::html(ParagraphMode::UseParagraphTags);

    for i in 0..200 {
        let input = random_text(&mut rng);
        let output = renderer.render(&input);

        if input.is_empty() {
            assert_eq!(output, "", "iteration {i}");
            continue;
        }

        // a trailing boundary closes the last paragraph without opening another
        let boundaries = input.matches('\n').count();
        let expected = if input.ends_with('\n') {
            boundaries
        } else {
            boundaries + 1
        };
        let opens = output.matches("<p>").count();
        let closes = output.matches("</p>").count();
        assert_eq!(opens, expected, "iteration {i}: {input:?} -> {output:?}");
        assert_eq!(opens, closes, "iteration {i}: {input:?} -> {output:?}");
        assert!(output.starts_with("<p>"), "iteration {i}: {output:?}");
        assert!(output.ends_with("</p>"), "iteration {i}: {output:?}");
    }
}

#[test]
fn randomized_quotes_alternate_and_reset_per_call() {
    let mut rng = Lcg::new(0xC0FF_EE00_0042);
    let renderer = InlineRenderer::html(ParagraphMode::UseLineBreakTag);

    for i in 0..200 {
        let input = random_text(&mut rng);
        let first = renderer.render(&input);
        let second = renderer.render(&input);
        assert_eq!(first, second, "iteration {i}");

        let quotes = input.matches('"').count();
        let curly = input.matches('\u{201c}').count();
        assert_eq!(
            first.matches("<q>").count(),
            quotes.div_ceil(2) + curly,
            "iteration {i}: {input:?} -> {first:?}"
        );
        assert_eq!(first.matches("</q>").count(), quotes / 2, "iteration {i}");
        assert!(!first.contains('"'), "iteration {i}");
        assert!(!first.contains('\n'), "iteration {i}");
    }
}

#[test]
fn randomized_markdown_tables_keep_shape() {
    let mut rng = Lcg::new(0x7AB1_E5);

    for i in 0..50 {
        let columns = 1 + rng.next_below(4);
        let rows = rng.next_below(5);
        let mut formatter = Dialect::Markdown.formatter(&RenderOptions::default());
        let mut out = Vec::new();

        formatter.start_table(&mut out).unwrap();
        formatter.start_row(&mut out).unwrap();
        for c in 0..columns {
            formatter.start_column_heading(&mut out).unwrap();
            formatter.render(&mut out, &format!("col{c}")).unwrap();
            formatter.end_column_heading(&mut out).unwrap();
        }
        formatter.end_row(&mut out).unwrap();
        for _ in 0..rows {
            formatter.start_row(&mut out).unwrap();
            for _ in 0..columns {
                formatter.start_cell(&mut out).unwrap();
                formatter.render(&mut out, &random_text(&mut rng)).unwrap();
                formatter.end_cell(&mut out).unwrap();
            }
            formatter.end_row(&mut out).unwrap();
        }
        formatter.end_table(&mut out).unwrap();

        let markdown = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = markdown.lines().collect();
        assert_eq!(lines.len(), rows + 2, "iteration {i}: {markdown:?}");
        assert_eq!(lines[1], format!("{}|", "| - ".repeat(columns)));
        assert_eq!(markdown.matches("| - ").count(), columns, "iteration {i}");
        for line in &lines[2..] {
            let unescaped_pipes = line.matches('|').count() - line.matches("\\|").count();
            assert_eq!(unescaped_pipes, columns + 1, "iteration {i}: {line:?}");
        }
    }
}
