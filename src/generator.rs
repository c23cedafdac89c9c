//! Random but plausible user data.
//!
//! Every function takes the random source explicitly. Request handlers pass
//! `rand::rng()`; tests pass a seeded `StdRng`.

use chrono::{DateTime, Duration, Utc};
use fake::Fake;
use fake::faker::address::en::{
    BuildingNumber, CityName, CountryName, StateName, StreetName, ZipCode,
};
use fake::faker::company::en::CompanyName;
use fake::faker::internet::en::{FreeEmail, Username};
use fake::faker::job::en::Title;
use fake::faker::lorem::en::Sentence;
use fake::faker::name::en::{FirstName, LastName};
use fake::faker::phone_number::en::PhoneNumber;
use rand::Rng;
use rand::distr::Alphanumeric;
use uuid::Builder;

use crate::models::{Address, UserInfo, format_instant};

pub const TOKEN_LEN: usize = 32;

/// Join dates fall this many days in the past, upper bound exclusive.
pub const JOINED_DAYS_AGO: std::ops::Range<i64> = 1..730;

const AVATAR_BASE_URL: &str = "https://api.dicebear.com/7.x/avataaars/svg";

/// Opaque login token. Not stored and never checked again.
pub fn token<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..TOKEN_LEN)
        .map(|_| char::from(rng.sample(Alphanumeric)))
        .collect()
}

pub fn joined_date<R: Rng + ?Sized>(rng: &mut R, now: DateTime<Utc>) -> DateTime<Utc> {
    now - Duration::days(rng.random_range(JOINED_DAYS_AGO))
}

pub fn address<R: Rng + ?Sized>(rng: &mut R) -> Address {
    let number: String = BuildingNumber().fake_with_rng(rng);
    let street: String = StreetName().fake_with_rng(rng);

    Address {
        street: format!("{} {}", number, street),
        city: CityName().fake_with_rng(rng),
        state: StateName().fake_with_rng(rng),
        zip_code: ZipCode().fake_with_rng(rng),
        country: CountryName().fake_with_rng(rng),
    }
}

/// Builds a full profile for `username`. Everything except the username is
/// freshly drawn from `rng`, including a v4 id.
pub fn user_info<R: Rng + ?Sized>(rng: &mut R, username: &str) -> UserInfo {
    let now = Utc::now();
    let id = Builder::from_random_bytes(rng.random()).into_uuid();
    let avatar_seed: String = Username().fake_with_rng(rng);

    UserInfo {
        id: id.to_string(),
        username: username.to_string(),
        email: FreeEmail().fake_with_rng(rng),
        first_name: FirstName().fake_with_rng(rng),
        last_name: LastName().fake_with_rng(rng),
        avatar: format!("{}?seed={}", AVATAR_BASE_URL, avatar_seed),
        phone: PhoneNumber().fake_with_rng(rng),
        address: address(rng),
        company: CompanyName().fake_with_rng(rng),
        job_title: Title().fake_with_rng(rng),
        bio: Sentence(20..27).fake_with_rng(rng),
        joined_date: format_instant(joined_date(rng, now)),
        last_login: format_instant(now),
    }
}
