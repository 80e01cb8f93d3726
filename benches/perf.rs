use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use pl_prep::player_features::{PlayerStats, preprocess_player_data};
use pl_prep::season_combiner::{CombinedDataset, SeasonTable};
use pl_prep::style_features::{TeamStyleStats, preprocess_team_style_data};
use pl_prep::validation::validate_team_name;

const TEAMS: [&str; 20] = [
    "Arsenal",
    "Aston Villa",
    "Bournemouth",
    "Brentford",
    "Brighton",
    "Burnley",
    "Chelsea",
    "Crystal Palace",
    "Everton",
    "Fulham",
    "Liverpool",
    "Luton",
    "Man City",
    "Man United",
    "Newcastle",
    "Nott'm Forest",
    "Sheffield United",
    "Tottenham",
    "West Ham",
    "Wolves",
];

fn sample_style() -> TeamStyleStats {
    TeamStyleStats {
        matches_played: 38.0,
        fouls: 342.0,
        yellow_cards: 57.0,
        red_cards: 1.0,
        avg_goals_scored: 2.5,
        avg_shots: 17.5,
        avg_shots_on_target: 6.2,
        shot_accuracy: 0.354,
        avg_goals_conceded: 0.89,
        clean_sheet_rate: 0.34,
        avg_corners: 7.0,
        win_rate: 0.737,
        home_win_rate: 0.789,
        away_win_rate: 0.684,
        points_per_game: 2.39,
    }
}

fn sample_player() -> PlayerStats {
    PlayerStats {
        nineties: 30.0,
        goals: 21.0,
        assists: 9.0,
        tackles: 15.0,
        interceptions: 6.0,
        passes_completed: 600.0,
        passes_attempted: 800.0,
        shots: 100.0,
        shots_on_target: 50.0,
        age: Some(24.0),
        minutes: Some(2700.0),
        goals_per_shot: Some(0.21),
        progressive_carries: Some(80.0),
        ..PlayerStats::default()
    }
}

fn sample_tables() -> Vec<SeasonTable> {
    let headers = ["Date", "HomeTeam", "AwayTeam", "FTHG", "FTAG", "FTR"]
        .map(String::from)
        .to_vec();
    (0..30)
        .map(|season| {
            let rows = (0..380)
                .map(|idx| {
                    let home = TEAMS[idx % TEAMS.len()];
                    let away = TEAMS[(idx + 7) % TEAMS.len()];
                    vec![
                        format!("{:02}/{:02}/2010", 1 + idx % 28, 1 + idx % 12),
                        home.to_string(),
                        away.to_string(),
                        (idx % 4).to_string(),
                        (idx % 3).to_string(),
                        "H".to_string(),
                    ]
                })
                .collect();
            SeasonTable {
                season: format!("{}-{:02}", 1993 + season, (94 + season) % 100),
                source_file: format!("season-{season:04}.csv"),
                headers: headers.clone(),
                rows,
            }
        })
        .collect()
}

fn bench_style_vector(c: &mut Criterion) {
    let stats = sample_style();
    c.bench_function("style_vector", |b| {
        b.iter(|| {
            let vector = preprocess_team_style_data(black_box(&stats));
            black_box(vector.values[0]);
        })
    });
}

fn bench_player_features(c: &mut Criterion) {
    let stats = sample_player();
    c.bench_function("player_features_forward", |b| {
        b.iter(|| {
            let row = preprocess_player_data(black_box(&stats), "Forward").unwrap();
            black_box(row.len());
        })
    });
}

fn bench_team_suggestions(c: &mut Criterion) {
    let teams = TEAMS.map(String::from).to_vec();
    c.bench_function("team_suggestions", |b| {
        b.iter(|| {
            let out = validate_team_name(black_box("Man Utd"), &teams);
            black_box(out.is_valid);
        })
    });
}

fn bench_combine_tables(c: &mut Criterion) {
    let tables = sample_tables();
    c.bench_function("combine_tables", |b| {
        b.iter(|| {
            let ds = CombinedDataset::from_tables(black_box(tables.clone()));
            black_box(ds.summary().total_matches);
        })
    });
}

criterion_group!(
    perf,
    bench_style_vector,
    bench_player_features,
    bench_team_suggestions,
    bench_combine_tables
);
criterion_main!(perf);
