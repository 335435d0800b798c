//! Classroom entity - the only resource with exclusive-use semantics
//!
//! Two states, Free and Occupied; transitions only through `occupy` and
//! `vacate`, each valid solely from the opposite state. No lock is needed:
//! there is exactly one logical actor, and `University::conduct_exam` is
//! the sole internal user of the occupy/vacate pairing.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// A lecture room, keyed by its number within the university
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Classroom {
    number: u32,
    capacity: u32,
    occupied: bool,
}

impl Classroom {
    /// Create a free classroom.
    pub fn new(number: u32, capacity: u32) -> Self {
        Self {
            number,
            capacity,
            occupied: false,
        }
    }

    #[inline]
    pub fn number(&self) -> u32 {
        self.number
    }

    #[inline]
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    #[inline]
    pub fn is_occupied(&self) -> bool {
        self.occupied
    }

    /// Mark the room occupied.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::State` if the room is already occupied.
    pub fn occupy(&mut self) -> Result<(), DomainError> {
        if self.occupied {
            return Err(DomainError::state(format!(
                "Classroom {} is already occupied",
                self.number
            )));
        }
        self.occupied = true;
        Ok(())
    }

    /// Mark the room free.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::State` if the room is already free.
    pub fn vacate(&mut self) -> Result<(), DomainError> {
        if !self.occupied {
            return Err(DomainError::state(format!(
                "Classroom {} is already free",
                self.number
            )));
        }
        self.occupied = false;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_free() {
        let room = Classroom::new(101, 30);
        assert!(!room.is_occupied());
        assert_eq!(room.number(), 101);
        assert_eq!(room.capacity(), 30);
    }

    #[test]
    fn occupy_then_vacate() {
        let mut room = Classroom::new(101, 30);
        room.occupy().unwrap();
        assert!(room.is_occupied());
        room.vacate().unwrap();
        assert!(!room.is_occupied());
    }

    #[test]
    fn double_occupy_fails() {
        let mut room = Classroom::new(101, 30);
        room.occupy().unwrap();
        let err = room.occupy().unwrap_err();
        assert!(matches!(err, DomainError::State(_)));
        // The failed transition leaves the room occupied.
        assert!(room.is_occupied());
    }

    #[test]
    fn vacating_a_free_room_fails() {
        let mut room = Classroom::new(101, 30);
        let err = room.vacate().unwrap_err();
        assert!(matches!(err, DomainError::State(_)));
        assert!(!room.is_occupied());
    }
}
