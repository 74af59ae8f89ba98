use bikeshare::{daily_sum, hourly_mean, seasonal_mean, weather_points, Bikeshare, RentalField};
use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use polars::df;
use polars::frame::DataFrame;

/// Builds raw tables shaped like two years of the rental dataset.
fn synthetic_tables(days: usize) -> (DataFrame, DataFrame) {
    let start = NaiveDate::from_ymd_opt(2011, 1, 1).unwrap();

    let mut dates = Vec::with_capacity(days);
    let mut seasons = Vec::with_capacity(days);
    let mut cnt = Vec::with_capacity(days);
    let mut registered = Vec::with_capacity(days);
    let mut casual = Vec::with_capacity(days);
    let mut temp = Vec::with_capacity(days);
    let mut hum = Vec::with_capacity(days);
    for i in 0..days {
        let date = start + chrono::Duration::days(i as i64);
        dates.push(date.format("%Y-%m-%d").to_string());
        seasons.push((i / 91 % 4 + 1) as i64);
        let registered_count = 100 + (i % 50) as i64;
        let casual_count = 20 + (i % 30) as i64;
        registered.push(registered_count);
        casual.push(casual_count);
        cnt.push(registered_count + casual_count);
        temp.push((i % 100) as f64 / 100.0);
        hum.push((i % 90) as f64 / 90.0);
    }
    let daily = df!(
        "dteday" => dates,
        "season" => seasons,
        "cnt" => cnt,
        "registered" => registered,
        "casual" => casual,
        "temp" => temp,
        "hum" => hum,
    )
    .unwrap();

    let mut hours = Vec::with_capacity(days * 24);
    let mut hourly_cnt = Vec::with_capacity(days * 24);
    for i in 0..days {
        for hour in 0..24i64 {
            hours.push(hour);
            hourly_cnt.push(hour * 3 + (i % 10) as i64);
        }
    }
    let hourly = df!("hr" => hours, "cnt" => hourly_cnt).unwrap();

    (daily, hourly)
}

fn bench_bikeshare(c: &mut Criterion) {
    let (daily, hourly) = synthetic_tables(731);
    let bikeshare = Bikeshare::from_frames(daily, hourly).unwrap();
    let range = bikeshare.date_bounds();

    c.bench_function("daily_sum", |b| {
        let frame = bikeshare.daily();
        b.iter(|| {
            daily_sum(black_box(&frame), RentalField::Total)
                .collect()
                .unwrap()
        })
    });
    c.bench_function("hourly_mean", |b| {
        let frame = bikeshare.hourly();
        b.iter(|| hourly_mean(black_box(&frame)).collect().unwrap())
    });
    c.bench_function("seasonal_mean", |b| {
        let frame = bikeshare.daily();
        b.iter(|| seasonal_mean(black_box(&frame)).collect().unwrap())
    });
    c.bench_function("weather_points", |b| {
        let frame = bikeshare.daily();
        b.iter(|| weather_points(black_box(&frame)).unwrap())
    });
    c.bench_function("render_view", |b| {
        b.iter(|| bikeshare.render_view(black_box(range)).unwrap())
    });
}

criterion_group!(benches, bench_bikeshare);
criterion_main!(benches);
