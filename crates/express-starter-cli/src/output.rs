//! Terminal output for the create-express-api CLI, styled with [`console`].

use console::style;

/// Bold cyan title with an underline.
pub fn print_header(text: &str) {
    println!("\n{}", style(text).bold().cyan());
    println!("{}", style("=".repeat(text.len())).dim());
}

/// Blue line announcing work that is about to start.
pub fn print_action(text: &str) {
    println!("{}", style(text).blue());
}

/// Green `[OK]` line for a completed item.
pub fn print_success(text: &str) {
    println!("{} {}", style("[OK]").green().bold(), text);
}

/// Yellow `[HINT]` on stderr, shown after an error.
pub fn print_hint(text: &str) {
    eprintln!("{} {}", style("[HINT]").yellow().bold(), text);
}

/// Red `[ERROR]` on stderr.
pub fn print_error(text: &str) {
    eprintln!("{} {}", style("[ERROR]").red().bold(), text);
}

/// Commands to run inside the new project.
pub fn print_next_steps(project: &str) {
    println!("\n{}", style("Next steps:").bold());
    for cmd in [format!("cd {project}"), "npm install".into(), "npm run dev".into()] {
        println!("  {}", style(cmd).cyan());
    }
    println!();
}
