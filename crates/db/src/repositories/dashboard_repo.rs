//! Read-only aggregate queries behind the dashboard.
//!
//! Every query takes `today` explicitly so results are reproducible and
//! independent of the database server's clock.

use internhub_core::dashboard::{days_until, ExpiryWindow, COMPLETED_CYCLE_CONTRACTS};
use internhub_core::status::ContractStatus;
use internhub_core::types::{Date, DbId};
use sqlx::{FromRow, PgPool};

use crate::models::dashboard::{
    CompletedCycleIntern, DashboardSummary, ExpiringContract, InternOnVacation,
};

/// Raw row shared by the expiring-contract and on-vacation queries.
#[derive(Debug, FromRow)]
struct DatedRow {
    id: DbId,
    intern_id: DbId,
    intern_name: String,
    end_date: Date,
}

/// Provides the dashboard aggregations.
pub struct DashboardRepo;

impl DashboardRepo {
    /// Distinct interns with at least one contract that is not closed, plus
    /// the total number of contracts.
    pub async fn summary(pool: &PgPool) -> Result<DashboardSummary, sqlx::Error> {
        sqlx::query_as::<_, DashboardSummary>(
            "SELECT
                (SELECT COUNT(DISTINCT intern_id) FROM contracts WHERE status_id <> $1) AS active_interns,
                (SELECT COUNT(*) FROM contracts) AS total_contracts",
        )
        .bind(ContractStatus::Closed.id())
        .fetch_one(pool)
        .await
    }

    /// Contracts that are not closed and end within `[today, today + window]`,
    /// soonest first.
    pub async fn expiring_contracts(
        pool: &PgPool,
        today: Date,
        window: ExpiryWindow,
    ) -> Result<Vec<ExpiringContract>, sqlx::Error> {
        let rows = sqlx::query_as::<_, DatedRow>(
            "SELECT c.id, c.intern_id, i.name AS intern_name, c.end_date
             FROM contracts c
             JOIN interns i ON i.id = c.intern_id
             WHERE c.status_id <> $1
               AND c.end_date >= $2
               AND c.end_date <= $3
             ORDER BY c.end_date, c.id",
        )
        .bind(ContractStatus::Closed.id())
        .bind(today)
        .bind(window.horizon(today))
        .fetch_all(pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| ExpiringContract {
                contract_id: r.id,
                intern_id: r.intern_id,
                intern_name: r.intern_name,
                end_date: r.end_date,
                days_remaining: days_until(r.end_date, today),
            })
            .collect())
    }

    /// Vacations whose period contains `today`, earliest return first.
    pub async fn interns_on_vacation(
        pool: &PgPool,
        today: Date,
    ) -> Result<Vec<InternOnVacation>, sqlx::Error> {
        let rows = sqlx::query_as::<_, DatedRow>(
            "SELECT v.id, v.intern_id, i.name AS intern_name, v.end_date
             FROM vacations v
             JOIN interns i ON i.id = v.intern_id
             WHERE v.start_date <= $1
               AND v.end_date >= $1
             ORDER BY v.end_date, v.id",
        )
        .bind(today)
        .fetch_all(pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| InternOnVacation {
                vacation_id: r.id,
                intern_id: r.intern_id,
                intern_name: r.intern_name,
                return_date: r.end_date,
                days_until_return: days_until(r.end_date, today),
            })
            .collect())
    }

    /// Interns with at least [`COMPLETED_CYCLE_CONTRACTS`] contracts, all closed.
    pub async fn completed_cycles(pool: &PgPool) -> Result<Vec<CompletedCycleIntern>, sqlx::Error> {
        sqlx::query_as::<_, CompletedCycleIntern>(
            "SELECT i.id AS intern_id, i.name AS intern_name, COUNT(c.id) AS contract_count
             FROM interns i
             JOIN contracts c ON c.intern_id = i.id
             GROUP BY i.id, i.name
             HAVING COUNT(c.id) >= $1
                AND COUNT(*) FILTER (WHERE c.status_id <> $2) = 0
             ORDER BY i.name, i.id",
        )
        .bind(COMPLETED_CYCLE_CONTRACTS)
        .bind(ContractStatus::Closed.id())
        .fetch_all(pool)
        .await
    }
}
