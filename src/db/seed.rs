//! Sample data for fresh installations

use sqlx::SqlitePool;

use crate::{
    db::{open_session, repositories::ContestRepository},
    error::AppResult,
    models::NewContest,
};

/// (class_level, year, pre_number, contest_url, solution_url)
const SAMPLE_CONTESTS: &[(i32, i32, i32, &str, &str)] = &[
    (9, 2025, 1, "https://codeforces.com/", "https://codeforces.com/blog/entry/1/"),
    (9, 2025, 2, "https://codeforces.com/", "https://codeforces.com/blog/entry/2/"),
    (9, 2025, 3, "https://codeforces.com/", "https://codeforces.com/blog/entry/3/"),
    (10, 2025, 1, "https://atcoder.jp/", "https://atcoder.jp/contests/abc001/editorial"),
    (10, 2025, 2, "https://atcoder.jp/", "https://atcoder.jp/contests/abc002/editorial"),
    (10, 2025, 3, "https://atcoder.jp/", "https://atcoder.jp/contests/abc003/editorial"),
    (11, 2025, 1, "https://www.codechef.com/", "https://discuss.codechef.com/"),
    (11, 2025, 2, "https://www.codechef.com/", "https://discuss.codechef.com/"),
    (11, 2025, 3, "https://www.codechef.com/", "https://discuss.codechef.com/"),
    (12, 2025, 1, "https://projecteuler.net/", "https://projecteuler.net/thread=1"),
    (12, 2025, 2, "https://projecteuler.net/", "https://projecteuler.net/thread=2"),
    (12, 2025, 3, "https://projecteuler.net/", "https://projecteuler.net/thread=3"),
    (9, 2024, 1, "https://codeforces.com/", "https://codeforces.com/blog/entry/100/"),
    (10, 2024, 1, "https://atcoder.jp/", "https://atcoder.jp/contests/abc100/editorial"),
];

/// Insert the sample contests if the table is empty.
///
/// Returns the number of rows inserted (zero when data already exists).
pub async fn seed_sample_contests(pool: &SqlitePool) -> AppResult<usize> {
    let mut session = open_session(pool).await?;

    if ContestRepository::count(&mut session).await? > 0 {
        tracing::info!("Contests table already populated, skipping sample data");
        return Ok(0);
    }

    for &(class_level, year, pre_number, contest_url, solution_url) in SAMPLE_CONTESTS {
        let contest = NewContest {
            class_level,
            year,
            pre_number,
            contest_url: contest_url.to_string(),
            solution_url: solution_url.to_string(),
        };
        ContestRepository::create(&mut session, &contest).await?;
    }

    session.commit().await?;

    tracing::info!(count = SAMPLE_CONTESTS.len(), "Inserted sample contests");
    Ok(SAMPLE_CONTESTS.len())
}
