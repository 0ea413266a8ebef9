use crate::{
    db::{
        models::{ContactMessage, PriceQuote, RepairBooking, SellRequest, SwapRequest},
        DbClient,
    },
    Result,
};
use diesel::{insert_into, ExpressionMethods, QueryDsl};
use diesel_async::RunQueryDsl;
use tracing::{error, info};

/// Upper bound on the rows returned by the lead listings
const LIST_LIMIT: i64 = 1000;

/// DbClient helper functions to store and list leads
impl DbClient {
    pub async fn insert_contact_message(&self, record: &ContactMessage) -> Result<ContactMessage> {
        use crate::schema::contact_messages::dsl::*;

        let conn = &mut self.get_db_conn().await?;
        let stored = insert_into(contact_messages)
            .values(record)
            .get_result::<ContactMessage>(conn)
            .await?;
        info!("Stored contact message {}", stored.id);
        Ok(stored)
    }

    pub async fn insert_sell_request(&self, record: &SellRequest) -> Result<SellRequest> {
        use crate::schema::sell_requests::dsl::*;

        let conn = &mut self.get_db_conn().await?;
        let stored = insert_into(sell_requests)
            .values(record)
            .get_result::<SellRequest>(conn)
            .await?;
        info!("Stored sell request {}", stored.id);
        Ok(stored)
    }

    pub async fn insert_swap_request(&self, record: &SwapRequest) -> Result<SwapRequest> {
        use crate::schema::swap_requests::dsl::*;

        let conn = &mut self.get_db_conn().await?;
        let stored = insert_into(swap_requests)
            .values(record)
            .get_result::<SwapRequest>(conn)
            .await?;
        info!("Stored swap request {}", stored.id);
        Ok(stored)
    }

    pub async fn insert_repair_booking(&self, record: &RepairBooking) -> Result<RepairBooking> {
        use crate::schema::repair_bookings::dsl::*;

        let conn = &mut self.get_db_conn().await?;
        let stored = insert_into(repair_bookings)
            .values(record)
            .get_result::<RepairBooking>(conn)
            .await?;
        info!("Stored repair booking {}", stored.id);
        Ok(stored)
    }

    pub async fn insert_price_quote(&self, record: &PriceQuote) -> Result<PriceQuote> {
        use crate::schema::price_quotes::dsl::*;

        let conn = &mut self.get_db_conn().await?;
        let stored = insert_into(price_quotes)
            .values(record)
            .get_result::<PriceQuote>(conn)
            .await?;
        info!("Stored price quote {}", stored.id);
        Ok(stored)
    }

    /// Newest sell requests first
    pub async fn get_sell_requests(&self) -> Result<Vec<SellRequest>> {
        use crate::schema::sell_requests::dsl::*;

        let conn = &mut self.get_db_conn().await?;
        sell_requests
            .order(created_at.desc())
            .limit(LIST_LIMIT)
            .load::<SellRequest>(conn)
            .await
            .map_err(|e| {
                error!("Failed to fetch sell requests: {}", e);
                e.into()
            })
    }

    /// Newest swap requests first
    pub async fn get_swap_requests(&self) -> Result<Vec<SwapRequest>> {
        use crate::schema::swap_requests::dsl::*;

        let conn = &mut self.get_db_conn().await?;
        swap_requests
            .order(created_at.desc())
            .limit(LIST_LIMIT)
            .load::<SwapRequest>(conn)
            .await
            .map_err(|e| {
                error!("Failed to fetch swap requests: {}", e);
                e.into()
            })
    }

    /// Newest repair bookings first
    pub async fn get_repair_bookings(&self) -> Result<Vec<RepairBooking>> {
        use crate::schema::repair_bookings::dsl::*;

        let conn = &mut self.get_db_conn().await?;
        repair_bookings
            .order(created_at.desc())
            .limit(LIST_LIMIT)
            .load::<RepairBooking>(conn)
            .await
            .map_err(|e| {
                error!("Failed to fetch repair bookings: {}", e);
                e.into()
            })
    }
}
