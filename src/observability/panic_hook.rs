//! Custom panic hook for structured crash reports.
//!
//! When boundmap crashes we want to say what it was doing: which phase,
//! which transformer stage, which service.

use super::context::{get_current_context, OptimizationContext};
use std::panic::PanicHookInfo;
use tracing::Span;

const VERSION: &str = env!("CARGO_PKG_VERSION");
const WIDTH: usize = 78;

/// Install the custom panic hook.
///
/// Call early in `main()`, before any work begins.
pub fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        print_crash_report(info);
    }));
}

fn print_crash_report(info: &PanicHookInfo<'_>) {
    let context = get_current_context();

    eprintln!();
    print_header();
    print_panic_details(info);
    print_context_section(&context);
    print_backtrace_section();
}

fn border(left: char, right: char) -> String {
    format!("{}{}{}", left, "═".repeat(WIDTH), right)
}

fn row(text: &str) -> String {
    format!("║  {:<width$}║", truncate(text, WIDTH - 2), width = WIDTH - 2)
}

fn print_header() {
    let timestamp = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC");

    eprintln!("{}", border('╔', '╗'));
    eprintln!("{}", row("BOUNDMAP CRASH REPORT"));
    eprintln!("{}", border('╠', '╣'));
    eprintln!("{}", row(&format!("Version: {}", VERSION)));
    eprintln!("{}", row(&format!("Platform: {}", std::env::consts::OS)));
    eprintln!("{}", row(&format!("Time: {}", timestamp)));
    eprintln!("{}", border('╠', '╣'));
}

fn print_panic_details(info: &PanicHookInfo<'_>) {
    eprintln!("{}", row(&format!("PANIC: {}", extract_panic_message(info))));

    if let Some(location) = info.location() {
        eprintln!(
            "{}",
            row(&format!(
                "Location: {}:{}:{}",
                location.file(),
                location.line(),
                location.column()
            ))
        );
    }
}

fn context_lines(context: &OptimizationContext) -> Vec<String> {
    let mut lines = vec!["OPERATION CONTEXT:".to_string()];
    match &context.phase {
        Some(phase) => lines.push(format!("  Phase: {}", phase)),
        None => lines.push("  Phase: (not set - crash occurred outside optimization)".into()),
    }
    if let Some(stage) = &context.current_stage {
        lines.push(format!("  Stage: {}", stage));
    }
    if let Some(service) = &context.current_service {
        lines.push(format!("  Service: {}", service));
    }
    lines
}

fn print_context_section(context: &OptimizationContext) {
    for line in context_lines(context) {
        eprintln!("{}", row(&line));
    }

    let current_span = Span::current();
    if let Some(metadata) = current_span.metadata() {
        eprintln!("{}", row(&format!("  Span: {}", metadata.name())));
    }
}

fn print_backtrace_section() {
    eprintln!("{}", border('╠', '╣'));

    if std::env::var("RUST_BACKTRACE").is_ok() {
        eprintln!("{}", row("STACK TRACE:"));
        eprintln!("{}", border('╚', '╝'));
        eprintln!();
        eprintln!("{}", std::backtrace::Backtrace::capture());
    } else {
        eprintln!("{}", row("Run with RUST_BACKTRACE=1 for stack trace"));
        eprintln!("{}", border('╚', '╝'));
    }
}

pub(crate) fn extract_panic_message(info: &PanicHookInfo<'_>) -> String {
    payload_message(info.payload())
}

/// Best-effort text of a panic payload.
pub(crate) fn payload_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
