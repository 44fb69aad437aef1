//! Appointment scheduling
//!
//! Booking finds or creates the patient, assigns a time slot from the
//! wall-clock hour, persists the appointment with an embedded patient
//! snapshot, and sends the confirmation message. Listing materializes the
//! whole collection and filters/sorts in memory on every call.

use chrono::{Duration, Local, Timelike};
use tracing::info;

use crate::error::Result;
use crate::ids::IdGenerator;
use crate::logging::OperationTimer;
use crate::messaging::MessageLog;
use crate::models::{
    Appointment, AppointmentFilters, AppointmentStatus, BookingRequest, MessageType,
};
use crate::patients::PatientRepository;
use crate::schema::collections;
use crate::store::Store;
use crate::validation::InputValidator;

/// First bookable slot of the clinic day
const OPENING_SLOT: &str = "09:00";
/// Hour the clinic opens (24h clock)
const OPENING_HOUR: u32 = 9;
/// Hour the clinic closes (24h clock)
const CLOSING_HOUR: u32 = 18;

/// Behavioral switches for the scheduler
#[derive(Debug, Clone, Copy, Default)]
pub struct SchedulerOptions {
    /// When a booking arrives at or after closing, the assigned slot is the
    /// opening slot but the date historically stays *today*. Setting this
    /// rolls the date to the next day instead.
    pub roll_after_hours_to_next_day: bool,
}

/// Appointment scheduler
#[derive(Clone)]
pub struct AppointmentScheduler {
    store: Store,
    patients: PatientRepository,
    messages: MessageLog,
    ids: IdGenerator,
    options: SchedulerOptions,
}

impl AppointmentScheduler {
    /// Create a scheduler over the given store and collaborators
    #[must_use]
    pub fn new(
        store: Store,
        ids: IdGenerator,
        patients: PatientRepository,
        messages: MessageLog,
        options: SchedulerOptions,
    ) -> Self {
        Self {
            store,
            patients,
            messages,
            ids,
            options,
        }
    }

    /// Book an appointment, creating the patient on first sight.
    ///
    /// The appointment embeds a snapshot of the patient record as of this
    /// call; the snapshot is never re-synced afterwards. Exactly one
    /// confirmation message is sent through the messaging log.
    pub fn book(&self, request: &BookingRequest) -> Result<Appointment> {
        let _timer = OperationTimer::new("book_appointment");
        InputValidator::validate_booking(request)?;

        let patient = match self.patients.find_by_phone(&request.phone)? {
            Some(existing) => existing,
            None => self.patients.create(request)?,
        };

        let now = Local::now();
        let appointment = Appointment {
            id: self.ids.new_id(),
            patient_id: patient.id.clone(),
            patient: patient.clone(),
            appointment_date: booking_date(now, self.options),
            appointment_time: slot_for_hour(now.hour()),
            status: AppointmentStatus::Pending,
            notes: String::new(),
            created_at: now,
            updated_at: now,
        };

        let mut appointments: Vec<Appointment> =
            self.store.read_collection(collections::APPOINTMENTS)?;
        appointments.push(appointment.clone());
        self.store
            .write_collection(collections::APPOINTMENTS, &appointments)?;

        self.messages.send(
            &patient.phone,
            &confirmation_text(&patient.name),
            MessageType::AppointmentConfirmation,
            Some(appointment.id.clone()),
        )?;

        info!(
            appointment_id = %appointment.id,
            patient_id = %patient.id,
            slot = %appointment.appointment_time,
            "appointment booked"
        );
        Ok(appointment)
    }

    /// All appointments matching the filters, most recently created first
    pub fn list(&self, filters: Option<&AppointmentFilters>) -> Result<Vec<Appointment>> {
        let mut appointments: Vec<Appointment> =
            self.store.read_collection(collections::APPOINTMENTS)?;

        if let Some(filters) = filters {
            if let Some(date) = filters.date {
                appointments.retain(|apt| apt.appointment_date.date_naive() == date);
            }
            if let Some(status) = filters.status {
                appointments.retain(|apt| apt.status == status);
            }
            if let Some(name) = &filters.patient_name {
                let needle = name.to_lowercase();
                appointments.retain(|apt| apt.patient.name.to_lowercase().contains(&needle));
            }
        }

        appointments.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(appointments)
    }
}

/// Deterministic slot rule: map the current wall-clock hour to a slot string.
///
/// Before opening the first slot of today is assigned; at or after closing
/// the opening slot is assigned (the caller decides whether the date rolls);
/// otherwise the next full hour.
#[must_use]
pub fn slot_for_hour(hour: u32) -> String {
    if hour < OPENING_HOUR || hour >= CLOSING_HOUR {
        OPENING_SLOT.to_string()
    } else {
        format!("{:02}:00", hour + 1)
    }
}

/// Date assigned to a booking made at `now`.
///
/// After-hours bookings get the opening slot but keep today's date; this
/// mirrors the behavior of the system being replaced. The scheduler option
/// rolls the date to the next day instead.
fn booking_date(
    now: chrono::DateTime<Local>,
    options: SchedulerOptions,
) -> chrono::DateTime<Local> {
    if now.hour() >= CLOSING_HOUR && options.roll_after_hours_to_next_day {
        now + Duration::days(1)
    } else {
        now
    }
}

/// Confirmation message sent to the patient right after booking
#[must_use]
pub fn confirmation_text(name: &str) -> String {
    format!("مرحباً {name}، تم حجز موعدك بنجاح. سيتم التواصل معك قريباً لتأكيد الموعد.")
}
