use std::env;
use std::process::Command;

fn main() {
    let opt_level = env::var("OPT_LEVEL").unwrap_or_else(|_| "0".to_string());
    let is_optimized = opt_level != "0";

    // Optimised builds outside of a git checkout still get a usable identifier
    let version = if is_optimized {
        Command::new("git")
            .arg("rev-parse")
            .arg("--short")
            .arg("HEAD")
            .output()
            .ok()
            .filter(|output| output.status.success())
            .and_then(|output| String::from_utf8(output.stdout).ok())
            .map(|hash| format!("{} ({})", env!("CARGO_PKG_VERSION"), hash.trim()))
            .unwrap_or_else(|| env!("CARGO_PKG_VERSION").to_string())
    } else {
        "Development build".into()
    };

    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rustc-env=RELEASE={}", version.trim());
}
