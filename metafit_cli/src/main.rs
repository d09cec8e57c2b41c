use clap::{Parser, Subcommand};
use metafit_core::nutrition::{self, NutritionStore};
use metafit_core::progress::{self, Milestone};
use metafit_core::*;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "metafit")]
#[command(about = "30-day fitness companion", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Override data directory
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Override fitness tier (explorer, warrior, champion)
    #[arg(long, global = true)]
    tier: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a day's workout (default)
    Show {
        /// Day to show (1..=30); defaults to day 1
        #[arg(long)]
        day: Option<u32>,
    },

    /// Mark an exercise complete (e.g. `metafit done 1-2`)
    Done {
        /// Exercise id as shown by `show`
        exercise_id: String,
    },

    /// Run the countdown for an exercise, completing it on expiry
    Timer {
        /// Exercise id as shown by `show`
        exercise_id: String,

        /// Countdown seconds; defaults to the exercise target for
        /// time-based exercises
        #[arg(long)]
        duration: Option<u32>,

        /// Skip the one-second sleeps (for testing)
        #[arg(long)]
        fast: bool,
    },

    /// Program progress, calorie targets and milestones
    Status,

    /// Append a progress entry (weight, workouts, calories, notes)
    Log {
        #[arg(long)]
        weight: Option<f64>,

        #[arg(long)]
        workouts: Option<u32>,

        #[arg(long)]
        calories: Option<u32>,

        #[arg(long)]
        notes: Option<String>,
    },

    /// Roll up journal entries to CSV
    Rollup {
        /// Clean up processed journal files after rollup
        #[arg(long)]
        cleanup: bool,
    },

    /// Search the food table or log foods eaten today
    Food {
        /// Name search over the food table
        #[arg(long)]
        search: Option<String>,

        /// Food id to add to today's log
        #[arg(long)]
        add: Option<String>,

        /// Serving quantity for --add
        #[arg(long, default_value_t = 1.0)]
        qty: f64,
    },
}

fn main() -> Result<()> {
    metafit_core::logging::init();

    let cli = Cli::parse();

    let config = Config::load()?;
    let data_dir = cli.data_dir.unwrap_or_else(|| config.data.data_dir.clone());
    let tier = match &cli.tier {
        Some(raw) => raw.parse()?,
        None => config.program.tier,
    };

    match cli.command {
        Some(Commands::Show { day }) => cmd_show(data_dir, tier, day),
        Some(Commands::Done { exercise_id }) => cmd_done(data_dir, tier, &exercise_id),
        Some(Commands::Timer {
            exercise_id,
            duration,
            fast,
        }) => cmd_timer(data_dir, tier, &exercise_id, duration, fast),
        Some(Commands::Status) => cmd_status(data_dir, tier, &config),
        Some(Commands::Log {
            weight,
            workouts,
            calories,
            notes,
        }) => cmd_log(data_dir, weight, workouts, calories, notes),
        Some(Commands::Rollup { cleanup }) => cmd_rollup(data_dir, cleanup),
        Some(Commands::Food { search, add, qty }) => cmd_food(data_dir, &config, search, add, qty),
        None => cmd_show(data_dir, tier, None),
    }
}

fn store_dir(data_dir: &PathBuf) -> PathBuf {
    data_dir.join("store")
}

fn journal_path(data_dir: &PathBuf) -> PathBuf {
    data_dir.join("journal").join("progress.jsonl")
}

fn csv_path(data_dir: &PathBuf) -> PathBuf {
    data_dir.join("progress.csv")
}

fn open_tracker(data_dir: &PathBuf, tier: Tier) -> Result<WorkoutTracker<FileStore>> {
    let store = FileStore::new(store_dir(data_dir));
    WorkoutTracker::open(store, get_default_catalog(), tier)
}

fn cmd_show(data_dir: PathBuf, tier: Tier, day: Option<u32>) -> Result<()> {
    let mut tracker = open_tracker(&data_dir, tier)?;
    if let Some(day) = day {
        tracker.set_day(day)?;
    }

    display_progress_header(&tracker);
    display_day(tracker.current_plan()?);
    warn_if_degraded(&tracker);
    Ok(())
}

fn cmd_done(data_dir: PathBuf, tier: Tier, exercise_id: &str) -> Result<()> {
    let mut tracker = open_tracker(&data_dir, tier)?;
    tracker.complete_exercise(exercise_id)?;

    println!("✓ Exercise {} complete!", exercise_id);

    let day = exercise_day(exercise_id);
    if let Some(day) = day {
        if tracker.state().day(day).map(|d| d.is_complete()) == Some(true) {
            println!("✓ Day {} finished, strong work!", day);
        }
    }

    let summary = tracker.summary();
    println!(
        "  {} of 30 days complete ({}%)",
        summary.completed_days, summary.percent
    );
    warn_if_degraded(&tracker);
    Ok(())
}

fn cmd_timer(
    data_dir: PathBuf,
    tier: Tier,
    exercise_id: &str,
    duration: Option<u32>,
    fast: bool,
) -> Result<()> {
    let mut tracker = open_tracker(&data_dir, tier)?;
    tracker.start_timer(exercise_id, duration)?;

    let total = tracker.timer_remaining().unwrap_or(0);
    println!("Timer started: {} for {}", format_seconds(total), exercise_id);

    // Cooperative one-second scheduler driving the countdown
    loop {
        if !fast {
            std::thread::sleep(std::time::Duration::from_secs(1));
        }

        match tracker.tick() {
            TickOutcome::Counting { remaining } => {
                print!("\r  {} remaining ", format_seconds(remaining));
                io::stdout().flush()?;
            }
            TickOutcome::Expired { exercise_id } => {
                println!("\n✓ Time's up: exercise {} complete!", exercise_id);
                break;
            }
            TickOutcome::Noop => break,
        }
    }

    let summary = tracker.summary();
    println!(
        "  {} of 30 days complete ({}%)",
        summary.completed_days, summary.percent
    );
    warn_if_degraded(&tracker);
    Ok(())
}

fn cmd_status(data_dir: PathBuf, tier: Tier, config: &Config) -> Result<()> {
    let tracker = open_tracker(&data_dir, tier)?;
    let summary = tracker.summary();

    println!("╭─────────────────────────────────────────╮");
    println!("│  30-DAY TRANSFORMATION: {:<14} │", tier.to_string().to_uppercase());
    println!("╰─────────────────────────────────────────╯");
    println!();
    println!("  Completed: {} days", summary.completed_days);
    println!("  Remaining: {} days", summary.remaining_days);
    println!("  Progress:  {}%", summary.percent);

    if let Some(profile) = &config.profile {
        let calories = profile.daily_calories();
        let macros = nutrition::macro_targets(calories, profile.goal);
        println!();
        println!("  Daily calories: {} kcal", calories);
        println!(
            "  Macros: {:.0}g protein / {:.0}g carbs / {:.0}g fat",
            macros.protein_g, macros.carbs_g, macros.fat_g
        );
    }

    let entries = journal::read_entries(&journal_path(&data_dir))?;
    if !entries.is_empty() {
        println!();
        if let Some(weight) = progress::latest_weight(&entries) {
            println!("  Latest weight: {} kg", weight);
        }
        println!(
            "  Weekly workouts: {} / {}",
            progress::latest_weekly_workouts(&entries),
            config.targets.weekly_workout_target
        );
    }

    let milestones = progress::evaluate_milestones(&entries);
    println!();
    println!("  Milestones:");
    for milestone in &milestones {
        let mark = if milestone.unlocked { "★" } else { "☆" };
        println!("    {} {}: {}", mark, milestone.name, milestone.description);
    }

    warn_if_degraded(&tracker);
    Ok(())
}

fn cmd_log(
    data_dir: PathBuf,
    weight: Option<f64>,
    workouts: Option<u32>,
    calories: Option<u32>,
    notes: Option<String>,
) -> Result<()> {
    let mut entry = ProgressEntry::new(chrono::Utc::now());
    entry.weight_kg = weight;
    entry.workouts_completed = workouts;
    entry.calories_consumed = calories;
    entry.notes = notes;

    if entry.is_empty() {
        println!("Nothing to log. Pass --weight, --workouts, --calories or --notes.");
        return Ok(());
    }

    let path = journal_path(&data_dir);
    let before = unlocked_names(&journal::read_entries(&path)?);

    let mut journal = JsonlJournal::new(&path);
    journal.append(&entry)?;
    println!("✓ Progress logged");

    let after = progress::evaluate_milestones(&journal::read_entries(&path)?);
    for milestone in after.iter().filter(|m| m.unlocked) {
        if !before.contains(&milestone.name) {
            println!("★ Milestone unlocked: {}!", milestone.name);
        }
    }

    Ok(())
}

fn unlocked_names(entries: &[ProgressEntry]) -> Vec<&'static str> {
    progress::evaluate_milestones(entries)
        .into_iter()
        .filter(|m| m.unlocked)
        .map(|m: Milestone| m.name)
        .collect()
}

fn cmd_rollup(data_dir: PathBuf, cleanup: bool) -> Result<()> {
    let journal_path = journal_path(&data_dir);

    if !journal_path.exists() {
        println!("No journal found - nothing to roll up.");
        return Ok(());
    }

    let count =
        metafit_core::csv_rollup::journal_to_csv_and_archive(&journal_path, &csv_path(&data_dir))?;

    println!("✓ Rolled up {} entries to CSV", count);
    println!("  CSV: {}", csv_path(&data_dir).display());

    if cleanup {
        let journal_dir = data_dir.join("journal");
        let cleaned = metafit_core::csv_rollup::cleanup_processed_journals(&journal_dir)?;
        if cleaned > 0 {
            println!("✓ Cleaned up {} processed journal files", cleaned);
        }
    }

    Ok(())
}

fn cmd_food(
    data_dir: PathBuf,
    config: &Config,
    search: Option<String>,
    add: Option<String>,
    qty: f64,
) -> Result<()> {
    if let Some(term) = search {
        let hits = nutrition::search_foods(&term);
        if hits.is_empty() {
            println!("No foods match '{}'.", term);
        }
        for item in hits {
            println!(
                "  {:<16} {} ({} kcal per {})",
                item.id, item.name, item.calories, item.serving
            );
        }
        return Ok(());
    }

    let today = chrono::Local::now().date_naive();
    let mut store = NutritionStore::new(FileStore::new(store_dir(&data_dir)));

    let log = if let Some(food_id) = add {
        let item = nutrition::find_food(&food_id).ok_or_else(|| {
            Error::Validation(format!(
                "unknown food '{}' (try `metafit food --search`)",
                food_id
            ))
        })?;
        let logged = nutrition::log_food(item, qty, chrono::Utc::now());
        println!("✓ Logged {} x{}", item.name, qty);
        store.add(today, logged)?
    } else {
        store.load_day(today)?
    };

    if log.is_empty() {
        println!("Nothing logged today yet.");
        return Ok(());
    }

    println!();
    println!("  Today ({}):", today);
    for food in &log {
        println!(
            "    {} x{}: {:.0} kcal",
            food.name, food.quantity, food.calories
        );
    }

    let totals = nutrition::totals(&log);
    println!();
    println!(
        "  Totals: {:.0} kcal, {:.1}g protein, {:.1}g carbs, {:.1}g fat",
        totals.calories, totals.protein, totals.carbs, totals.fat
    );

    if let Some(profile) = &config.profile {
        let target = profile.daily_calories();
        println!(
            "  Calorie target: {} kcal ({:.0}% reached)",
            target,
            progress::calorie_progress(totals.calories.round() as u32, target)
        );
    }

    Ok(())
}

// ----------------------------------------------------------------------
// Display helpers
// ----------------------------------------------------------------------

fn display_progress_header<S: KeyValueStore>(tracker: &WorkoutTracker<S>) {
    let summary = tracker.summary();
    println!("╭─────────────────────────────────────────╮");
    println!("│  30-DAY TRANSFORMATION PROGRESS         │");
    println!("╰─────────────────────────────────────────╯");
    println!(
        "  Day {} of 30 · {} completed · {}%",
        tracker.day(),
        summary.completed_days,
        summary.percent
    );
    println!();
}

fn display_day(plan: &DayPlan) {
    let done = if plan.is_complete() { "  ✓ Completed" } else { "" };
    println!("  Day {}: {}{}", plan.day, plan.title, done);
    println!("  Focus: {}", plan.focus);
    println!();

    for exercise in &plan.exercises {
        let mark = if exercise.completed { "[x]" } else { "[ ]" };
        println!(
            "  {} {}  {}  ({} {})",
            mark, exercise.id, exercise.name, exercise.target, exercise.unit
        );
        if !exercise.muscle_groups.is_empty() {
            println!("        Muscles: {}", exercise.muscle_groups.join(", "));
        }
        if !exercise.equipment.is_empty() {
            println!("        Equipment: {}", exercise.equipment.join(", "));
        }
        for step in &exercise.instructions {
            println!("        • {}", step);
        }
        println!();
    }
}

fn warn_if_degraded<S: KeyValueStore>(tracker: &WorkoutTracker<S>) {
    if tracker.is_degraded() {
        eprintln!("⚠ Storage is unavailable; progress will not survive a restart.");
    }
}

fn exercise_day(exercise_id: &str) -> Option<u32> {
    exercise_id.split('-').next()?.parse().ok()
}

fn format_seconds(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}
