//! Provider catalog: the fixed set of specialties and doctors, with each
//! doctor's bookable slots generated for the booking window at build time.
//!
//! The catalog is immutable after construction. Booking never mutates slot
//! availability; availability is drawn once per slot when the catalog is
//! built.

use chrono::{Duration, NaiveDate};
use rand::Rng;

use crate::config;
use crate::models::{Doctor, Specialty, TimeSlot};

// ─── Catalog ──────────────────────────────────────────────────────────────────

/// Directory of specialties and doctors.
#[derive(Debug, Clone)]
pub struct Catalog {
    specialties: Vec<Specialty>,
    doctors: Vec<Doctor>,
}

impl Catalog {
    /// Build the catalog with slots generated relative to `today`.
    pub fn new(today: NaiveDate) -> Self {
        Self::with_rng(today, &mut rand::thread_rng())
    }

    /// Build with a caller-supplied RNG so slot availability is reproducible.
    pub fn with_rng<R: Rng>(today: NaiveDate, rng: &mut R) -> Self {
        let specialties: Vec<Specialty> = SPECIALTY_ROWS
            .iter()
            .map(|&(id, name, icon, description)| Specialty {
                id: id.to_string(),
                name: name.to_string(),
                icon: icon.to_string(),
                description: description.to_string(),
            })
            .collect();

        let mut doctors = Vec::with_capacity(DOCTOR_ROWS.len());
        for row in DOCTOR_ROWS {
            doctors.push(Doctor {
                id: row.id.to_string(),
                name: row.name.to_string(),
                specialty: row.specialty.to_string(),
                specialty_id: row.specialty_id.to_string(),
                rating: row.rating,
                experience: row.experience,
                price: row.price,
                photo_url: photo_url(row.photo),
                available_slots: generate_time_slots(today, rng),
            });
        }

        Self {
            specialties,
            doctors,
        }
    }

    pub fn specialties(&self) -> &[Specialty] {
        &self.specialties
    }

    pub fn specialty_by_id(&self, id: &str) -> Option<&Specialty> {
        self.specialties.iter().find(|s| s.id == id)
    }

    pub fn specialty_by_name(&self, name: &str) -> Option<&Specialty> {
        self.specialties.iter().find(|s| s.name == name)
    }

    pub fn doctors(&self) -> &[Doctor] {
        &self.doctors
    }

    pub fn doctor_by_id(&self, id: &str) -> Option<&Doctor> {
        self.doctors.iter().find(|d| d.id == id)
    }

    /// Doctors practicing the given specialty, in catalog order.
    pub fn doctors_by_specialty(&self, specialty_id: &str) -> Vec<&Doctor> {
        self.doctors
            .iter()
            .filter(|d| d.specialty_id == specialty_id)
            .collect()
    }

    /// Look up one slot on one doctor's calendar.
    pub fn slot(&self, doctor_id: &str, slot_id: &str) -> Option<&TimeSlot> {
        self.doctor_by_id(doctor_id)?
            .available_slots
            .iter()
            .find(|s| s.id == slot_id)
    }
}

// ─── Slot generation ──────────────────────────────────────────────────────────

/// Generate one doctor's calendar: every consultation time on each of the
/// next `SLOT_WINDOW_DAYS` days, starting tomorrow. Availability is drawn
/// independently per slot.
pub fn generate_time_slots<R: Rng>(today: NaiveDate, rng: &mut R) -> Vec<TimeSlot> {
    let mut slots =
        Vec::with_capacity(config::SLOT_WINDOW_DAYS as usize * config::SLOT_TIMES.len());

    for day in 1..=config::SLOT_WINDOW_DAYS {
        let date = today + Duration::days(day);
        for &time in config::SLOT_TIMES {
            slots.push(TimeSlot {
                id: format!("{date}-{time}"),
                date,
                time: time.to_string(),
                available: rng.gen::<f64>() > config::SLOT_UNAVAILABLE_BIAS,
            });
        }
    }

    slots
}

// ─── Seed data ────────────────────────────────────────────────────────────────

/// (id, name, icon, description)
const SPECIALTY_ROWS: &[(&str, &str, &str, &str)] = &[
    ("1", "Medicina General", "🩺", "Atención primaria y consultas generales"),
    ("2", "Pediatría", "👶", "Salud infantil y adolescente"),
    ("3", "Cardiología", "❤️", "Corazón y sistema cardiovascular"),
    ("4", "Dermatología", "🧴", "Piel, cabello y uñas"),
    ("5", "Ginecología", "👩", "Salud femenina"),
    ("6", "Traumatología", "🦴", "Huesos, músculos y articulaciones"),
    ("7", "Neurología", "🧠", "Sistema nervioso"),
    ("8", "Oftalmología", "👁️", "Salud visual"),
    ("9", "Psicología", "🧘", "Salud mental y bienestar emocional"),
    ("10", "Nutrición", "🥗", "Alimentación y dietas"),
];

struct DoctorRow {
    id: &'static str,
    name: &'static str,
    specialty: &'static str,
    specialty_id: &'static str,
    rating: f64,
    experience: u32,
    price: u32,
    photo: &'static str,
}

const DOCTOR_ROWS: &[DoctorRow] = &[
    DoctorRow {
        id: "1",
        name: "Dra. María García López",
        specialty: "Medicina General",
        specialty_id: "1",
        rating: 4.9,
        experience: 15,
        price: 50,
        photo: "photo-1559839734-2b71ea197ec2",
    },
    DoctorRow {
        id: "2",
        name: "Dr. Carlos Rodríguez Sánchez",
        specialty: "Cardiología",
        specialty_id: "3",
        rating: 4.8,
        experience: 20,
        price: 80,
        photo: "photo-1612349317150-e413f6a5b16d",
    },
    DoctorRow {
        id: "3",
        name: "Dra. Ana Martínez Ruiz",
        specialty: "Pediatría",
        specialty_id: "2",
        rating: 4.95,
        experience: 12,
        price: 60,
        photo: "photo-1594824476967-48c8b964273f",
    },
    DoctorRow {
        id: "4",
        name: "Dr. Luis Fernández Torres",
        specialty: "Dermatología",
        specialty_id: "4",
        rating: 4.7,
        experience: 8,
        price: 70,
        photo: "photo-1622253692010-333f2da6031d",
    },
    DoctorRow {
        id: "5",
        name: "Dra. Patricia Gómez Vega",
        specialty: "Ginecología",
        specialty_id: "5",
        rating: 4.85,
        experience: 18,
        price: 75,
        photo: "photo-1651008376811-b90baee60c1f",
    },
    DoctorRow {
        id: "6",
        name: "Dr. Roberto Díaz Mendoza",
        specialty: "Traumatología",
        specialty_id: "6",
        rating: 4.6,
        experience: 22,
        price: 85,
        photo: "photo-1537368910025-700350fe46c7",
    },
    DoctorRow {
        id: "7",
        name: "Dra. Elena Castro Navarro",
        specialty: "Neurología",
        specialty_id: "7",
        rating: 4.9,
        experience: 16,
        price: 90,
        photo: "photo-1527613426441-4da17471b66d",
    },
    DoctorRow {
        id: "8",
        name: "Dr. Miguel Herrera Blanco",
        specialty: "Oftalmología",
        specialty_id: "8",
        rating: 4.75,
        experience: 14,
        price: 65,
        photo: "photo-1582750433449-648ed127bb54",
    },
    DoctorRow {
        id: "9",
        name: "Dra. Laura Jiménez Ortega",
        specialty: "Psicología",
        specialty_id: "9",
        rating: 4.92,
        experience: 10,
        price: 55,
        photo: "photo-1573496359142-b8d87734a5a2",
    },
    DoctorRow {
        id: "10",
        name: "Dr. Antonio Morales Prieto",
        specialty: "Nutrición",
        specialty_id: "10",
        rating: 4.8,
        experience: 7,
        price: 45,
        photo: "photo-1612531386530-97286d97c2d2",
    },
];

fn photo_url(photo: &str) -> String {
    format!("https://images.unsplash.com/{photo}?w=200&h=200&fit=crop&crop=face")
}
