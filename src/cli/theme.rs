use console::style;

pub fn print_success(message: &str) {
    println!("  {} {}", style("✓").green(), message);
}

pub fn print_error(message: &str) {
    eprintln!("  {} {}", style("✗").red(), message);
}

pub fn print_info(message: &str) {
    println!("  {} {}", style("ℹ").cyan(), message);
}
