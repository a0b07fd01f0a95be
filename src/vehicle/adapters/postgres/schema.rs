//! Diesel schema for vehicle registration persistence.
//!
//! Plate, chassis, and renavam carry unique indexes
//! (`idx_vehicles_plate`, `idx_vehicles_chassis`, `idx_vehicles_renavam`)
//! as defense in depth behind the service-level uniqueness checks.

diesel::table! {
    /// Vehicle registration records.
    vehicles (id) {
        /// Internal vehicle identifier.
        id -> Uuid,
        /// License plate, legacy or current national format.
        #[max_length = 8]
        plate -> Varchar,
        /// 17-character chassis number.
        #[max_length = 17]
        chassis -> Varchar,
        /// 11-digit national registration number.
        #[max_length = 11]
        renavam -> Varchar,
        /// Model name.
        #[max_length = 100]
        model -> Varchar,
        /// Make name.
        #[max_length = 100]
        make -> Varchar,
        /// Model year.
        year -> Int4,
        /// Free-form color description.
        #[max_length = 100]
        color -> Varchar,
        /// Vehicle classification (car, motorcycle, or truck).
        #[max_length = 20]
        vehicle_type -> Varchar,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}
