//! Securities sub-client — security detail, auction, and announcement
//! queries.
//!
//! Each operation is the same linear pipeline: build URL → fetch → branch on
//! the no-data sentinel → decode → convert. The sentinel branch lives here,
//! caller-side of the decoder, so a no-data body never reaches a JSON parser.

use crate::client::TreasuryDirectClient;
use crate::domain::security::wire;
use crate::domain::security::TreasurySecurity;
use crate::error::SdkError;
use crate::http::FetchOutcome;
use crate::shared::Cusip;

use chrono::NaiveDate;

pub struct Securities<'a> {
    pub(crate) client: &'a TreasuryDirectClient,
}

impl Securities<'_> {
    /// Look up a single security by CUSIP and issue date.
    ///
    /// Returns `None` when the upstream reports no matching security.
    pub async fn details(
        &self,
        cusip: &Cusip,
        issue_date: NaiveDate,
    ) -> Result<Option<TreasurySecurity>, SdkError> {
        match self.client.http.get_security(cusip, issue_date).await? {
            FetchOutcome::NoData => Ok(None),
            FetchOutcome::Body(body) => Ok(Some(wire::decode_one(&body)?.into())),
        }
    }

    /// List securities auctioned within the last `days_ago` days.
    pub async fn auctioned(&self, days_ago: u32) -> Result<Vec<TreasurySecurity>, SdkError> {
        match self.client.http.get_auctioned(days_ago).await? {
            FetchOutcome::NoData => Ok(Vec::new()),
            FetchOutcome::Body(body) => Ok(collect(wire::decode_many(&body)?)),
        }
    }

    /// List securities announced within the last `days_ago` days.
    pub async fn announced(&self, days_ago: u32) -> Result<Vec<TreasurySecurity>, SdkError> {
        match self.client.http.get_announced(days_ago).await? {
            FetchOutcome::NoData => Ok(Vec::new()),
            FetchOutcome::Body(body) => Ok(collect(wire::decode_many(&body)?)),
        }
    }
}

fn collect(responses: Vec<wire::SecurityResponse>) -> Vec<TreasurySecurity> {
    responses.into_iter().map(TreasurySecurity::from).collect()
}
