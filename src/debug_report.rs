use reductor::{NodeSummary, ParseResultVerbose, PassSummary, Resolved};

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";

    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        fn wrap(&self, s: &str, code: &str) -> String {
            if self.enabled { format!("{code}{s}{RESET}") } else { s.to_string() }
        }

        pub fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
            self.wrap(s.as_ref(), color)
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            self.wrap(s.as_ref(), BOLD)
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            self.wrap(s.as_ref(), DIM)
        }
    }
}

const SAMPLE_LIMIT: usize = 5;

pub fn print_run(res: &ParseResultVerbose, color: bool) {
    let palette = ansi::Palette::new(color);
    let details = &res.details;
    println!("\n{}", palette.bold(palette.paint(format!("⚙  Evaluating: \"{}\"", res.text), ansi::CYAN)));

    if !details.rewrites.is_empty() {
        println!("\n{}", palette.paint("━━━ Rewrites ━━━", ansi::GRAY));
        for (idx, rw) in details.rewrites.iter().enumerate() {
            println!(
                "  {} {} {} {} {}",
                palette.paint(format!("[{idx}]"), ansi::GRAY),
                palette.paint(&rw.pattern, ansi::BLUE),
                palette.paint(&rw.matched, ansi::YELLOW),
                palette.dim("→"),
                rw.output
            );
        }
    }

    println!("\n{}", palette.paint("━━━ Passes ━━━", ansi::GRAY));
    println!("  {} {}", palette.dim("fragments:"), details.chunks);
    for pass in &details.passes {
        print_pass(pass, &palette);
    }

    println!("\n{}", palette.paint("━━━ Result ━━━", ansi::GRAY));
    match &res.output {
        Resolved::Value(value) => {
            println!("  {} {}", palette.bold(palette.paint(value.to_string(), ansi::GREEN)), palette.dim(format!("{value:?}")));
        }
        Resolved::Chunks(chunks) if chunks.is_empty() => println!("{}", palette.dim("  Empty sequence")),
        Resolved::Chunks(chunks) => {
            println!("  {}", palette.paint(format!("{} chunks left unresolved", chunks.len()), ansi::YELLOW));
            for (idx, chunk) in chunks.iter().enumerate() {
                println!("    {} {}", palette.paint(format!("[{idx}]"), ansi::GRAY), chunk);
            }
        }
    }

    println!("\n{}", palette.paint("━━━ Timing ━━━", ansi::GRAY));
    println!(
        "  Total: {}  │  Tokenize: {}  │  Resolve: {}",
        palette.paint(format!("{:?}", details.total), ansi::GREEN),
        palette.paint(format!("{:?}", details.tokenize), ansi::CYAN),
        palette.dim(format!("{:?}", details.resolve)),
    );
    println!();
}

fn print_pass(pass: &PassSummary, palette: &ansi::Palette) {
    let label = palette.paint(format!("Pass {} {}:", pass.pass, pass.rule), ansi::BLUE);
    let status = if pass.skipped {
        palette.dim("– skipped")
    } else if pass.matches > 0 {
        palette.paint(
            format!("✓ {} match(es), {} pruned, {} left", pass.matches, pass.pruned, pass.remaining),
            ansi::GREEN,
        )
    } else {
        palette.dim("✗ no match")
    };
    println!("  {label} {status}");

    for node in pass.samples.iter().take(SAMPLE_LIMIT) {
        println!("    {}", fmt_node_compact(node, palette));
    }
    if pass.samples.len() > SAMPLE_LIMIT {
        println!("    {}", palette.dim(format!("... +{} more", pass.samples.len() - SAMPLE_LIMIT)));
    }
}

fn fmt_node_compact(node: &NodeSummary, palette: &ansi::Palette) -> String {
    format!(
        "{} {} {}",
        palette.paint(format!("{:?}", node.consumed), ansi::YELLOW),
        palette.paint(&node.token, ansi::BLUE),
        palette.dim(&node.preview)
    )
}
