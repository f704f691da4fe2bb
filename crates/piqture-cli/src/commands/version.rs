use console::style;

const CRATES: [(&str, &str); 6] = [
    ("piqture-ir", "circuit intermediate representation"),
    ("piqture-qasm3", "OpenQASM 3 emitter"),
    ("piqture-embed", "NEQR and FRQI image encodings"),
    ("piqture-tn", "matrix product state ansatz"),
    ("piqture-nn", "quanvolutional layer"),
    ("piqture-cli", "command-line interface"),
];

/// Print the version banner and the workspace crates.
pub fn execute() {
    println!(
        "{} {} - quantum image encodings and tensor-network ansätze",
        style("piqture").cyan().bold(),
        style(concat!("v", env!("CARGO_PKG_VERSION"))).yellow()
    );
    println!();
    for (name, role) in CRATES {
        println!("  {name:<15}{role}");
    }
    println!();
    println!("{}", style(concat!("License: ", env!("CARGO_PKG_LICENSE"))).dim());
}
