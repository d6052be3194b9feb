//! Display functions for command results

use super::formatters::{colored_guess, entropy_bar};
use crate::commands::{AnalysisResult, BenchmarkResult, OpeningResult, SolveResult};
use crate::game::GameOutcome;
use colored::Colorize;

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.answer.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        println!(
            "\nTurn {}: {} {}",
            i + 1,
            colored_guess(&step.word, step.pattern),
            step.pattern.to_emoji()
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
            if step.candidates_after > 0 {
                let ratio = step.candidates_before as f64 / step.candidates_after as f64;
                println!(
                    "  Info gained: {:.3} bits ({ratio:.1}x reduction)",
                    ratio.log2()
                );
            }
        }
    }

    println!();
    print_outcome(&result.outcome);
}

/// One-line verdict for a finished game
pub fn print_outcome(outcome: &GameOutcome) {
    if outcome.won {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", outcome.attempts_used)
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", outcome.attempts_used)
                .red()
                .bold()
        );
    }
}

/// Print the result of word analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "ENTROPY ANALYSIS:".bright_cyan().bold(),
        result.word.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    if !result.in_dictionary {
        println!("\n{}", "(not in the dictionary)".bright_black());
    }

    let bar = entropy_bar(result.metrics.entropy, result.total_candidates, 30);

    println!("\n📊 Against {} dictionary words:", result.total_candidates);
    println!(
        "   Entropy:     [{}] {}",
        bar.green(),
        format!("{:.3} bits", result.metrics.entropy).bright_yellow()
    );
    println!(
        "   Info gain:   {:.1}x reduction",
        result.expected_reduction
    );
    println!(
        "   Expected:    {:.1} candidates remain",
        result.metrics.expected_remaining
    );
    println!(
        "   Worst case:  {} candidates",
        result.metrics.max_partition
    );
}

/// Print the best opening and the runners-up
pub fn print_opening_result(result: &OpeningResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "BEST OPENING:".bright_cyan().bold(),
        result.best.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 Among {} dictionary words:", result.dictionary_size);
    for (rank, (word, metrics)) in result.ranking.iter().enumerate() {
        let bar = entropy_bar(metrics.entropy, result.dictionary_size, 20);
        println!(
            "   {:>3}. {} [{}] {:.3} bits, worst case {}",
            rank + 1,
            word.text().to_uppercase(),
            bar.green(),
            metrics.entropy,
            metrics.max_partition
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult, max_attempts: usize) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total);
    println!(
        "   Won:              {} ({})",
        result.wins,
        format!("{:.1}%", result.win_rate * 100.0).green()
    );
    println!(
        "   Average guesses:  {} (won games)",
        format!("{:.3}", result.average_attempts)
            .bright_yellow()
            .bold()
    );
    println!(
        "                     {:.3} (all games)",
        result.average_attempts_all
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());

    if result.total > 0 {
        println!("\n📈 {}", "Distribution:".bright_cyan().bold());
        for attempts in 1..=max_attempts {
            let count = result.distribution.get(&attempts).copied().unwrap_or(0);
            let pct = count as f64 / result.total as f64 * 100.0;
            let bar_width = (pct / 2.5) as usize;
            let bar = format!(
                "{}{}",
                "█".repeat(bar_width).green(),
                "░"
                    .repeat(40_usize.saturating_sub(bar_width))
                    .bright_black()
            );
            println!("   {attempts}: {bar} {count:4} ({pct:5.1}%)");
        }
    }

    if !result.lost_words.is_empty() {
        println!("\n❌ {}", "Lost:".red().bold());
        let lost: Vec<&str> = result.lost_words.iter().map(|w| w.text()).collect();
        println!("   {}", lost.join(", "));
    }
}
