#![allow(dead_code)]

//! Shared test fixtures: an in-memory store implementing the repository
//! traits, plus helpers to assemble application state without a database.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use bcr_api::application::services::{AuthService, CarService, RentalService, TokenService};
use bcr_api::domain::entities::{Car, NewCar, NewRental, NewUser, Rental, UpdateCar, User};
use bcr_api::domain::repositories::{CarQuery, CarRepository, RentalRepository, UserRepository};
use bcr_api::error::AppError;
use bcr_api::state::AppState;

pub const TEST_JWT_SECRET: &str = "test-signing-secret";

/// In-memory tables shared by the fake repositories.
#[derive(Default)]
pub struct InMemoryStore {
    pub cars: Mutex<Vec<Car>>,
    pub users: Mutex<Vec<User>>,
    pub rentals: Mutex<Vec<Rental>>,
    next_id: AtomicI64,
}

impl InMemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            next_id: AtomicI64::new(1),
            ..Self::default()
        })
    }

    fn next_id(&self) -> i64 {
        self.next_id.fetch_add(1, Ordering::SeqCst)
    }

    pub fn seed_car(&self, name: &str, price: i64, size: &str) -> Car {
        let now = Utc::now();
        let car = Car::new(
            self.next_id(),
            name.to_string(),
            price,
            size.to_string(),
            format!("https://example.com/{name}.jpg"),
            false,
            now,
            now,
        );
        self.cars.lock().unwrap().push(car.clone());
        car
    }

    pub fn seed_user(&self, name: &str, email: &str, password_hash: &str) -> User {
        let user = User {
            id: self.next_id(),
            name: name.to_string(),
            email: email.to_string(),
            encrypted_password: password_hash.to_string(),
            role_id: 2,
            created_at: Utc::now(),
        };
        self.users.lock().unwrap().push(user.clone());
        user
    }

    pub fn seed_rental(
        &self,
        user_id: i64,
        car_id: i64,
        start: DateTime<Utc>,
        end: Option<DateTime<Utc>>,
    ) -> Rental {
        let rental = Rental {
            id: self.next_id(),
            user_id,
            car_id,
            rent_started_at: start,
            rent_ended_at: end,
            created_at: Utc::now(),
        };
        self.rentals.lock().unwrap().push(rental.clone());
        rental
    }

    pub fn car(&self, id: i64) -> Option<Car> {
        self.cars.lock().unwrap().iter().find(|c| c.id == id).cloned()
    }
}

pub struct InMemoryCarRepository {
    store: Arc<InMemoryStore>,
}

#[async_trait]
impl CarRepository for InMemoryCarRepository {
    async fn create(&self, new_car: NewCar) -> Result<Car, AppError> {
        let now = Utc::now();
        let car = Car::new(
            self.store.next_id(),
            new_car.name,
            new_car.price,
            new_car.size,
            new_car.image,
            false,
            now,
            now,
        );
        self.store.cars.lock().unwrap().push(car.clone());
        Ok(car)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Car>, AppError> {
        Ok(self.store.car(id))
    }

    async fn list(&self, query: CarQuery) -> Result<Vec<Car>, AppError> {
        // The availability date only constrains the joined rentals; like the
        // SQL query it never removes cars from the page.
        let cars = self.store.cars.lock().unwrap();
        Ok(cars
            .iter()
            .filter(|c| query.size.as_deref().is_none_or(|s| c.size == s))
            .skip(query.offset as usize)
            .take(query.limit as usize)
            .cloned()
            .collect())
    }

    async fn count(&self, query: CarQuery) -> Result<i64, AppError> {
        let cars = self.store.cars.lock().unwrap();
        Ok(cars
            .iter()
            .filter(|c| query.size.as_deref().is_none_or(|s| c.size == s))
            .count() as i64)
    }

    async fn update(&self, id: i64, update: UpdateCar) -> Result<u64, AppError> {
        let mut cars = self.store.cars.lock().unwrap();
        match cars.iter_mut().find(|c| c.id == id) {
            Some(car) => {
                car.name = update.name;
                car.price = update.price;
                car.size = update.size;
                car.image = update.image;
                car.is_currently_rented = false;
                car.updated_at = Utc::now();
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: i64) -> Result<u64, AppError> {
        let mut cars = self.store.cars.lock().unwrap();
        let before = cars.len();
        cars.retain(|c| c.id != id);
        Ok((before - cars.len()) as u64)
    }
}

pub struct InMemoryUserRepository {
    store: Arc<InMemoryStore>,
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, new_user: NewUser) -> Result<User, AppError> {
        let user = User {
            id: self.store.next_id(),
            name: new_user.name,
            email: new_user.email,
            encrypted_password: new_user.encrypted_password,
            role_id: new_user.role_id,
            created_at: Utc::now(),
        };
        self.store.users.lock().unwrap().push(user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let users = self.store.users.lock().unwrap();
        Ok(users.iter().find(|u| u.email == email).cloned())
    }
}

pub struct InMemoryRentalRepository {
    store: Arc<InMemoryStore>,
}

impl InMemoryRentalRepository {
    fn contained(&self, car_id: i64, start: DateTime<Utc>, end: DateTime<Utc>) -> Option<Rental> {
        let rentals = self.store.rentals.lock().unwrap();
        rentals
            .iter()
            .find(|r| {
                r.car_id == car_id
                    && r.rent_started_at >= start
                    && r.rent_ended_at.is_some_and(|e| e <= end)
            })
            .cloned()
    }
}

#[async_trait]
impl RentalRepository for InMemoryRentalRepository {
    async fn find_contained(
        &self,
        car_id: i64,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Option<Rental>, AppError> {
        Ok(self.contained(car_id, start, end))
    }

    async fn book(&self, new_rental: NewRental) -> Result<Rental, AppError> {
        if self
            .contained(
                new_rental.car_id,
                new_rental.rent_started_at,
                new_rental.rent_ended_at,
            )
            .is_some()
        {
            return Err(AppError::AlreadyRented {
                message: "Car is already rented!".to_string(),
                details: serde_json::json!({ "id": new_rental.car_id }),
            });
        }

        let rental = Rental {
            id: self.store.next_id(),
            user_id: new_rental.user_id,
            car_id: new_rental.car_id,
            rent_started_at: new_rental.rent_started_at,
            rent_ended_at: Some(new_rental.rent_ended_at),
            created_at: Utc::now(),
        };
        self.store.rentals.lock().unwrap().push(rental.clone());

        if let Some(car) = self
            .store
            .cars
            .lock()
            .unwrap()
            .iter_mut()
            .find(|c| c.id == new_rental.car_id)
        {
            car.is_currently_rented = true;
        }

        Ok(rental)
    }
}

/// Assembles application state over the in-memory store.
pub fn create_test_state(store: Arc<InMemoryStore>) -> AppState {
    let car_repo = Arc::new(InMemoryCarRepository {
        store: store.clone(),
    });
    let user_repo = Arc::new(InMemoryUserRepository {
        store: store.clone(),
    });
    let rental_repo = Arc::new(InMemoryRentalRepository { store });

    let token_service = Arc::new(TokenService::new(TEST_JWT_SECRET, 60));

    AppState {
        auth_service: Arc::new(AuthService::new(user_repo, token_service.clone())),
        car_service: Arc::new(CarService::new(car_repo.clone())),
        rental_service: Arc::new(RentalService::new(car_repo, rental_repo)),
        token_service,
    }
}

/// Issues an access token for a seeded user.
pub fn token_for(state: &AppState, user: &User) -> String {
    state.token_service.issue(user).expect("token should sign")
}
