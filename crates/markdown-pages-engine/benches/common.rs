// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with **bold**, _italic_ and `code` plus a [link](/page).\n\n- Bullet point\n- Another item\n\n1. First\n2. Second\n\n> A quote\n> over two lines\n\n```\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_complex_markdown(sections: usize, paragraphs: usize) -> String {
    let mut content = String::new();

    for section in 0..sections {
        content.push_str(&format!("# Section {section}\n\n"));
        for p in 0..paragraphs {
            content.push_str(&format!(
                "Paragraph {p} has ![an image](/img/{section}-{p}.png) and **several** _inline_ `spans`\nwrapped over a second line.\n\n"
            ));
        }
        for level in 2..=6 {
            content.push_str(&format!("{} Level {level}\n\n", "#".repeat(level)));
        }
    }

    content
}
