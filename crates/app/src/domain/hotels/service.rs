//! Hotels service.

use std::collections::HashMap;

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use serde::Deserialize;
use tracing::info;
use validator::Validate;

use crate::{
    auth::hash_password,
    database::Db,
    domain::hotels::{
        data::NewHotel,
        errors::HotelsServiceError,
        records::{
            ContactDetails, HotelRecord, HotelSettings, HotelSummary, HotelUuid,
            HotelierEmailRecord, RoomCategory, RoomRecord, RoomUuid, hotelier_email_key,
            normalize_hotelier_email,
        },
    },
    store::{Collection, Direction, Query, WriteBatch},
};

/// Capacity given to rooms seeded from a room category.
const SEEDED_ROOM_CAPACITY: u32 = 2;

#[derive(Debug, Clone)]
pub struct StoreHotelsService {
    db: Db,
}

impl StoreHotelsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self { db }
    }
}

/// Only the owning hotel is needed to count bookings.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct BookingOwner {
    hotel_id: HotelUuid,
}

#[async_trait]
impl HotelsService for StoreHotelsService {
    async fn create_hotel(&self, hotel: NewHotel) -> Result<HotelRecord, HotelsServiceError> {
        hotel.validate()?;

        let hotelier_email = normalize_hotelier_email(&hotel.hotelier_email);
        let email_key = hotelier_email_key(&hotelier_email);

        let claimed: Option<HotelierEmailRecord> =
            self.db.get(Collection::HotelierEmails, email_key).await?;

        if claimed.is_some() {
            return Err(HotelsServiceError::AlreadyExists);
        }

        let id = HotelUuid::new();
        let now = Timestamp::now();

        let record = HotelRecord {
            id,
            hotel_name: hotel.hotel_name.trim().to_string(),
            domain: hotel.domain,
            hotelier_email,
            hotelier_password_hash: hash_password(&hotel.hotelier_password),
            contact: ContactDetails {
                email: hotel.contact_email,
                phone: hotel.contact_phone,
            },
            full_address: hotel.full_address,
            meal_plans: hotel.meal_plans,
            room_categories: hotel
                .room_categories
                .iter()
                .map(|name| RoomCategory {
                    name: name.trim().to_string(),
                })
                .collect(),
            bank_details: hotel.bank_details,
            settings: HotelSettings::default(),
            created_at: now,
            updated_at: now,
        };

        let mut batch = WriteBatch::new();
        batch.create(Collection::Hotels, id, &record)?;
        batch.create(
            Collection::HotelierEmails,
            email_key,
            &HotelierEmailRecord {
                hotel_id: id,
                email: record.hotelier_email.clone(),
            },
        )?;

        for category in &record.room_categories {
            let room_id = RoomUuid::new();

            batch.create(
                Collection::Rooms,
                room_id,
                &RoomRecord {
                    id: room_id,
                    hotel_id: id,
                    name: category.name.clone(),
                    capacity: SEEDED_ROOM_CAPACITY,
                    price: 0,
                    created_at: now,
                },
            )?;
        }

        self.db.commit(batch).await?;

        info!(hotel = %id, rooms = record.room_categories.len(), "hotel created");

        self.db
            .get(Collection::Hotels, id)
            .await?
            .ok_or(HotelsServiceError::NotFound)
    }

    async fn list_hotels(&self) -> Result<Vec<HotelSummary>, HotelsServiceError> {
        let hotels: Vec<HotelRecord> = self
            .db
            .query(Query::new(Collection::Hotels).order_by_created(Direction::Descending))
            .await?;

        let owners: Vec<BookingOwner> = self.db.query(Query::new(Collection::Bookings)).await?;

        let mut counts: HashMap<HotelUuid, usize> = HashMap::new();

        for owner in owners {
            *counts.entry(owner.hotel_id).or_default() += 1;
        }

        Ok(hotels
            .into_iter()
            .map(|hotel| HotelSummary {
                booking_count: counts.get(&hotel.id).copied().unwrap_or_default(),
                hotel,
            })
            .collect())
    }

    async fn get_hotel(&self, hotel: HotelUuid) -> Result<HotelRecord, HotelsServiceError> {
        self.db
            .get(Collection::Hotels, hotel)
            .await?
            .ok_or(HotelsServiceError::NotFound)
    }

    async fn list_rooms(&self, hotel: HotelUuid) -> Result<Vec<RoomRecord>, HotelsServiceError> {
        self.get_hotel(hotel).await?;

        Ok(self
            .db
            .query(
                Query::new(Collection::Rooms)
                    .filter("hotelId", hotel.to_string())
                    .order_by_created(Direction::Ascending),
            )
            .await?)
    }
}

#[automock]
#[async_trait]
pub trait HotelsService: Send + Sync {
    /// Creates a hotel and seeds one room per room category.
    async fn create_hotel(&self, hotel: NewHotel) -> Result<HotelRecord, HotelsServiceError>;

    /// Lists hotels, newest first, with their booking counts.
    async fn list_hotels(&self) -> Result<Vec<HotelSummary>, HotelsServiceError>;

    /// Retrieve a single hotel.
    async fn get_hotel(&self, hotel: HotelUuid) -> Result<HotelRecord, HotelsServiceError>;

    /// Lists the rooms of a hotel.
    async fn list_rooms(&self, hotel: HotelUuid) -> Result<Vec<RoomRecord>, HotelsServiceError>;
}
