use colored::Colorize;

use crate::deck::{self, SlideDescriptor, SlideKind};

pub fn run() -> anyhow::Result<()> {
    let registry = deck::ayo::deck()?;
    println!(
        "{} ({} slides)",
        "AYO pitch deck".bold(),
        registry.count()
    );
    println!();
    for (i, slide) in registry.iter().enumerate() {
        let number = format!("{:>2}", i + 1);
        let kind = format!("{:<12}", slide.kind().name());
        let kind = match slide.kind() {
            SlideKind::Normal => kind.dimmed(),
            SlideKind::Interactive => kind.magenta(),
            SlideKind::Demo => kind.green(),
        };
        println!(
            "{}  {} {} {}",
            number.dimmed(),
            format!("{:<20}", slide.id()).cyan(),
            kind,
            describe(slide)
        );
    }
    Ok(())
}

/// Heading plus step and auto-advance notes for one outline row.
fn describe(slide: &SlideDescriptor) -> String {
    let mut line = slide.content().heading().to_string();
    if slide.kind() == SlideKind::Interactive {
        line.push_str(&format!(" [{} steps]", slide.step_count()));
    }
    if let Some(delay) = slide.auto_advance() {
        line.push_str(&format!(" [auto {:.1}s]", delay.as_secs_f32()));
    }
    line
}
