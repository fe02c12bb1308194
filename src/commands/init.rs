use std::path::Path;

use crate::{
    InitArgs,
    config::{CONFIG_FILE, PageManifest, Settings},
};

pub async fn run(args: &InitArgs) -> Result<(), anyhow::Error> {
    let path = if args.path.is_relative() {
        std::env::current_dir()?.join(&args.path)
    } else {
        args.path.clone()
    };

    if !path.exists() {
        if args.create {
            tokio::fs::create_dir_all(&path).await?;
            println!("Created directory {path}", path = path.display());
        } else {
            return Err(anyhow::anyhow!(
                "Directory does not exist: {path}",
                path = path.display()
            ));
        }
    }

    println!("Initializing project in {}", path.display());

    let settings = Settings::default();
    write_new(&path.join(CONFIG_FILE), serde_yaml::to_string(&settings)?).await?;

    let manifest = serde_json::to_string_pretty(&PageManifest::default())?;
    write_new(&path.join(&settings.site.manifest), manifest + "\n").await?;

    Ok(())
}

/// Write a file unless it already exists.
async fn write_new(path: &Path, contents: String) -> Result<(), anyhow::Error> {
    if path.exists() {
        println!("Keeping existing {}", path.display());
        return Ok(());
    }

    tokio::fs::write(path, contents).await?;
    println!("Created {}", path.display());
    Ok(())
}
