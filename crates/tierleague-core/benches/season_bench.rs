//! # Season Benchmarks
//!
//! Performance benchmarks for tierleague-core ranking and season turnover.
//!
//! Run with: `cargo bench -p tierleague-core`

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use tierleague_core::{Competition, League, Team};

fn team_name(tier: usize, i: usize) -> String {
    format!("Tier{tier} Club{i:04}")
}

/// Create a league of `size` teams that has played a full round robin.
fn create_played_league(size: usize) -> League {
    let mut league = League::new(size).expect("league");
    for i in 0..size {
        let team = Team::new(team_name(0, i), "nick").expect("team");
        league.register_team(team).expect("register");
    }
    league.start_new_season().expect("start");

    for home in 0..size {
        for away in (home + 1)..size {
            let hg = ((home * 7 + away) % 5) as i32;
            let ag = ((away * 3 + home) % 4) as i32;
            league
                .play_match(&team_name(0, home), hg, &team_name(0, away), ag)
                .expect("match");
        }
    }
    league
}

/// Create a competition with every tier full and in season.
fn create_competition(tiers: usize, per_tier: usize) -> Competition {
    let mut comp = Competition::new("Bench", tiers, per_tier).expect("competition");
    for tier in 0..tiers {
        for i in 0..per_tier {
            let team = Team::new(team_name(tier, i), "nick").expect("team");
            comp.register_team(tier, team).expect("register");
        }
    }
    comp.start_season();
    comp
}

// =============================================================================
// BENCHMARKS
// =============================================================================

fn bench_ranked_standings(c: &mut Criterion) {
    let mut group = c.benchmark_group("ranked_standings");

    for size in [10, 20, 50].iter() {
        let league = create_played_league(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| black_box(league.ranked_standings().len()));
        });
    }

    group.finish();
}

fn bench_end_season(c: &mut Criterion) {
    let mut group = c.benchmark_group("end_season");

    for tiers in [2, 5, 10].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(tiers), tiers, |b, &tiers| {
            b.iter_batched(
                || create_competition(tiers, 20),
                |mut comp| black_box(comp.end_season()),
                criterion::BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_ranked_standings, bench_end_season);
criterion_main!(benches);
