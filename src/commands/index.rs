use crate::{IndexArgs, build::IndexStatus, commands::Project};

pub async fn run(args: &IndexArgs) -> Result<(), anyhow::Error> {
    let project = Project::load(args.config_file.as_deref())?;

    let Some(update) = project.builder().generate_index(&project.source())? else {
        println!(
            "No {} page in the manifest; nothing to index",
            project.settings.index.page_name()
        );
        return Ok(());
    };
    let content_path = project.resolve(&update.content_file);

    match update.status {
        IndexStatus::FragmentMissing => {
            return Err(anyhow::anyhow!(
                "Index fragment {} could not be read; not writing it",
                content_path.display()
            ));
        }
        IndexStatus::NoList => {
            println!(
                "Index fragment {} has no <ul> list to fill; left unchanged",
                content_path.display()
            );
            return Ok(());
        }
        IndexStatus::Updated | IndexStatus::Unchanged => {}
    }

    if args.dry_run {
        print!("{}", update.content);
        return Ok(());
    }

    if update.status == IndexStatus::Unchanged {
        println!("{} is up to date", content_path.display());
        return Ok(());
    }

    tokio::fs::write(&content_path, update.content).await?;
    println!("Updated {}", content_path.display());

    Ok(())
}
