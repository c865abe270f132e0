// benches/streaks.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};
use chrono::{Duration, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use statpulse::{
    model::{GameRecord, Location, Stat, WinLoss},
    streak::{find_streaks, StreakQuery},
};

/// ~450 players × 82 games, interleaved by date like a real season file.
fn synthetic_season() -> Vec<GameRecord> {
    let start = NaiveDate::from_ymd_opt(2024, 10, 22).unwrap_or_default();
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let mut out = Vec::with_capacity(450 * 82);
    for g in 0..82i64 {
        for id in 0..450u64 {
            let pts = rng.gen_range(0..45) as f64;
            out.push(GameRecord {
                season_id: "2024-25".into(),
                player_id: id,
                player_name: format!("Player {id}"),
                team: "AAA".into(),
                game_date: start + Duration::days(g * 2),
                matchup: "AAA vs. BBB".into(),
                location: Location::Home,
                opponent: "BBB".into(),
                win_loss: if rng.gen_bool(0.5) { WinLoss::Win } else { WinLoss::Loss },
                stats: statpulse::stat_line![Points => pts],
            });
        }
    }
    out
}

fn bench_streaks(c: &mut Criterion) {
    let recs = synthetic_season();

    c.bench_function("streaks_pts_20", |b| {
        let q = StreakQuery::new(Stat::Points, 20.0).min_length(2);
        b.iter(|| {
            let out = find_streaks(black_box(&recs), black_box(&q)).unwrap_or_default();
            black_box(out.len())
        })
    });

    c.bench_function("streaks_pts_30_active", |b| {
        let q = StreakQuery::new(Stat::Points, 30.0).min_length(3).active_only(true);
        b.iter(|| {
            let out = find_streaks(black_box(&recs), black_box(&q)).unwrap_or_default();
            black_box(out.len())
        })
    });
}

criterion_group!(benches, bench_streaks);
criterion_main!(benches);
