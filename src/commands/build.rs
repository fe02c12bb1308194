use crate::{BuildArgs, commands::Project, config::MissingPolicy};

pub async fn run(args: &BuildArgs) -> Result<(), anyhow::Error> {
    let project = Project::load(args.config_file.as_deref())?;

    let mut builder = project.builder();
    if args.strict {
        builder = builder.with_missing_policy(MissingPolicy::Fail);
    }

    let result = project.build(&builder)?;

    println!(
        "Built site to {} ({} pages, {} static files)",
        project.output_dir().display(),
        result.pages,
        result.assets
    );
    if result.missing > 0 {
        println!(
            "{} fragment(s) were missing and rendered empty; run with --strict to fail instead",
            result.missing
        );
    }

    Ok(())
}
