use canonical::{canonicalize, NormalizeConfig, NormalizedCode};

const SAMPLE: &str = r#"
# Sum two numbers
def Solve(a, b):
    total = a + b   # accumulate
    return total    // not python, still stripped
"#;

fn main() {
    let cfg = NormalizeConfig::default();

    let doc: NormalizedCode = canonicalize(SAMPLE, &cfg).expect("default config is valid");
    println!("normalized: {}", doc.text);
    println!("chars:      {}", doc.char_len);
    println!("sha256:     {}", doc.sha256_hex);
}
