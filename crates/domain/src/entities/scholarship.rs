//! Scholarship department - end-of-term award policy

use serde::{Deserialize, Serialize};

use crate::entities::Student;

/// Award policy: minimum qualifying average and base amount
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScholarshipDepartment {
    min_average_score: f64,
    base_amount: f64,
}

impl Default for ScholarshipDepartment {
    fn default() -> Self {
        Self {
            min_average_score: 6.0,
            base_amount: 100.0,
        }
    }
}

impl ScholarshipDepartment {
    pub fn new(min_average_score: f64, base_amount: f64) -> Self {
        Self {
            min_average_score,
            base_amount,
        }
    }

    #[inline]
    pub fn min_average_score(&self) -> f64 {
        self.min_average_score
    }

    #[inline]
    pub fn base_amount(&self) -> f64 {
        self.base_amount
    }

    /// Compute and assign awards for the whole roster.
    ///
    /// A student averaging at or above the minimum receives
    /// `base * (1 + (average - min) * 0.1)` rounded to 2 decimal places;
    /// everyone else is assigned 0.0. Every student in the slice gets an
    /// assignment. Returns how many students qualified.
    pub fn calculate_and_assign(&self, students: &mut [Student]) -> usize {
        let mut qualified = 0;
        for student in students.iter_mut() {
            let average = student.average_score();
            if average >= self.min_average_score {
                let bonus = (average - self.min_average_score) * 0.1;
                let amount = round_to_cents(self.base_amount * (1.0 + bonus));
                student.assign_scholarship(amount);
                qualified += 1;
            } else {
                student.assign_scholarship(0.0);
            }
        }
        qualified
    }
}

fn round_to_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::{Grade, PersonName, SubjectName};

    fn student_with_average(name: &str, grades: &[u8]) -> Student {
        let mut student = Student::new(PersonName::new(name).unwrap(), 20);
        for (i, &value) in grades.iter().enumerate() {
            let subject = SubjectName::new(format!("Subject {}", i)).unwrap();
            student
                .take_exam(&subject, Grade::new(value).unwrap(), None)
                .unwrap();
        }
        student
    }

    #[test]
    fn average_of_eight_earns_120() {
        let department = ScholarshipDepartment::default();
        let mut students = vec![student_with_average("High", &[8, 8])];

        let qualified = department.calculate_and_assign(&mut students);
        assert_eq!(qualified, 1);
        assert_eq!(students[0].scholarship_amount(), 120.0);
    }

    #[test]
    fn average_of_four_earns_nothing() {
        let department = ScholarshipDepartment::default();
        let mut students = vec![student_with_average("Low", &[4, 4])];

        let qualified = department.calculate_and_assign(&mut students);
        assert_eq!(qualified, 0);
        assert_eq!(students[0].scholarship_amount(), 0.0);
    }

    #[test]
    fn exactly_minimum_earns_base_amount() {
        let department = ScholarshipDepartment::default();
        let mut students = vec![student_with_average("Edge", &[6, 6])];

        assert_eq!(department.calculate_and_assign(&mut students), 1);
        assert_eq!(students[0].scholarship_amount(), 100.0);
    }

    #[test]
    fn every_student_gets_an_assignment() {
        let department = ScholarshipDepartment::default();
        let mut students = vec![
            student_with_average("High", &[10, 10]),
            student_with_average("Low", &[2, 2]),
        ];
        students[1].assign_scholarship(50.0); // stale award from last term

        department.calculate_and_assign(&mut students);
        assert_eq!(students[0].scholarship_amount(), 140.0);
        // The non-qualifying student is reset to zero, not left stale.
        assert_eq!(students[1].scholarship_amount(), 0.0);
    }

    #[test]
    fn awards_round_to_two_decimals() {
        let department = ScholarshipDepartment::new(6.0, 100.0);
        // Average 7.33... -> bonus 0.1333... -> 113.33
        let mut students = vec![student_with_average("Third", &[7, 7, 8])];

        department.calculate_and_assign(&mut students);
        assert_eq!(students[0].scholarship_amount(), 113.33);
    }
}
