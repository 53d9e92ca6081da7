use vergen_git2::{Emitter, Git2Builder};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Emits VERGEN_GIT_SHA, VERGEN_GIT_DESCRIBE and VERGEN_GIT_COMMIT_TIMESTAMP
    // for the window.buildInfo stamp. lib.rs falls back to "unknown" when absent.
    let git = Git2Builder::default()
        .commit_timestamp(true)
        .sha(true)
        .describe(true, true, None)
        .build()?;

    Emitter::default().add_instructions(&git)?.emit()?;

    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs");
    Ok(())
}
