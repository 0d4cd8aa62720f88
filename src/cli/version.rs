/// Display version information
pub fn execute() {
    println!("master-seed {}", env!("CARGO_PKG_VERSION"));
    println!("Deterministic master seed derivation from device seeds");
}
