use anyhow::Result;
use circle_icon_gen::verify_icon;
use std::path::PathBuf;

fn main() -> Result<()> {
    let paths: Vec<PathBuf> = std::env::args_os().skip(1).map(PathBuf::from).collect();
    if paths.is_empty() {
        anyhow::bail!("Usage: verify_icon <PNG>...");
    }

    let mut failed = 0;
    for path in &paths {
        let report = verify_icon(path)?;
        if report.is_valid() {
            println!("✓ {}: {}", path.display(), report);
        } else {
            println!("⚠ {}: {}", path.display(), report);
            failed += 1;
        }
    }

    if failed > 0 {
        anyhow::bail!("{} of {} icons do not match the expected circle", failed, paths.len());
    }
    Ok(())
}
