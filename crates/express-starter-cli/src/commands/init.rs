use std::path::Path;

use anyhow::Result;

use express_starter_core::layout::TemplateLayout;
use express_starter_core::materialize::Materializer;
use express_starter_core::name::ProjectName;
use express_starter_core::{project, template};

use crate::output;

/// Create a new project named `name` under `parent_dir`.
///
/// Validation happens before anything is written. If materialization fails
/// after the project directory was created, the directory is removed before
/// the error is returned.
pub fn run(name: &str, template_dir: Option<&Path>, parent_dir: &Path) -> Result<()> {
    output::print_header("Express TypeScript API Starter");

    let name = ProjectName::parse(name).inspect_err(|_| {
        output::print_hint("Project name should only contain lowercase letters, numbers, and hyphens.");
    })?;

    let template = template::locate(template_dir)?;
    let layout = TemplateLayout::load_or_default(template.path())?;
    tracing::info!(
        "template: {} (embedded: {})",
        template.path().display(),
        template.is_embedded()
    );

    output::print_action(&format!("Creating project {name}..."));
    let report = match project::create_project(
        template.path(),
        parent_dir,
        &name,
        &layout,
        &Materializer::default(),
    ) {
        Ok(report) => report,
        Err(err) => {
            if err.is_conflict() {
                output::print_hint("Choose a different name or remove the existing directory.");
            } else {
                project::discard(&parent_dir.join(name.as_str()));
            }
            return Err(err.into());
        }
    };

    for dir in &report.directories {
        output::print_success(&format!("Copied {dir}/"));
    }
    for file in &report.files {
        output::print_success(&format!("Copied {file}"));
    }
    if report.manifest_patched {
        output::print_success("Updated package.json");
    }
    if report.env_created {
        output::print_success("Created .env from .env.example");
    }

    output::print_success(&format!(
        "Project '{name}' created ({} files, {} skipped)",
        report.stats.files, report.stats.skipped
    ));
    output::print_next_steps(name.as_str());

    Ok(())
}
