// SPDX-License-Identifier: MIT OR Apache-2.0

//! Basic usage example for the gitcfg crate.
//!
//! This example demonstrates:
//! - Reading typed values from the merged and global git config
//! - Reading `.gitmodules` from a file and from a blob
//! - Loading several keys into a struct
//! - Telling missing keys apart from real failures
//!
//! To run this example from inside a git repository:
//! ```bash
//! git config --global --add ghq.root ~/dev
//! cargo run --example basic_usage
//! ```

use gitcfg::prelude::*;

#[derive(Debug, Default)]
struct Settings {
    user_name: String,
    user_email: String,
    pull_rebase: bool,
    gc_auto: i64,
    ghq_roots: Vec<String>,
}

gitconfig_schema!(Settings {
    user_name: "user.name",
    user_email: "user.email",
    pull_rebase: "pull.rebase",
    gc_auto: "gc.auto",
    ghq_roots: "ghq.root",
});

fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt::init();

    println!("=== gitcfg: Basic Usage ===\n");

    // Example 1: strings from the merged view
    println!("--- Example 1: String Values ---");
    let config = GitConfig::default();
    match config.get_string("user.email") {
        Ok(email) => println!("✓ user.email = {}", email),
        Err(e) if e.is_key_not_found() => println!("✗ user.email is not set"),
        Err(e) => return Err(e),
    }

    // Example 2: typed values
    println!("\n--- Example 2: Typed Values ---");
    match config.get_bool("pull.rebase") {
        Ok(rebase) => println!("✓ pull.rebase = {} (as bool)", rebase),
        Err(e) => println!("✗ pull.rebase: {}", e),
    }
    match config.get_int64("gc.auto") {
        Ok(n) => println!("✓ gc.auto = {} (as i64)", n),
        Err(e) => println!("✗ gc.auto: {}", e),
    }

    // Example 3: multi-valued keys and path expansion
    println!("\n--- Example 3: Multiple Values ---");
    match GitConfig::global().get_paths("ghq.root") {
        Ok(roots) => {
            for root in roots {
                println!("✓ ghq.root = {}", root);
            }
        }
        Err(e) => println!("✗ ghq.root: {}", e),
    }

    // Example 4: other sources
    println!("\n--- Example 4: File and Blob Sources ---");
    for reader in [
        GitConfig::file(".gitmodules"),
        GitConfig::blob("HEAD:.gitmodules"),
    ] {
        match reader.get_strings("submodule.vendor.url") {
            Ok(urls) => println!("✓ [{}] submodule.vendor.url = {:?}", reader.source(), urls),
            Err(e) => println!("✗ [{}] {}", reader.source(), e),
        }
    }

    // Example 5: struct loading
    println!("\n--- Example 5: Loading a Struct ---");
    let mut settings = Settings {
        gc_auto: 6700,
        ..Settings::default()
    };
    match config.load(&mut settings) {
        Ok(()) => {}
        Err(GitConfigError::Load(errors)) => {
            for (field, err) in errors.iter() {
                if err.is_key_not_found() {
                    println!("  {} not set, keeping default", field);
                } else {
                    println!("  {} failed: {}", field, err);
                }
            }
        }
        Err(e) => return Err(e),
    }
    println!("{:#?}", settings);

    println!("\n=== Example Complete ===");
    Ok(())
}
