use time::Date;

use crate::core::date::{calendar_day, parse_calendar_day};

/// A course that can be registered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Course {
    pub id: &'static str,
    pub label: &'static str,
    pub subjects: &'static [&'static str],
}

impl Course {
    pub fn offers(&self, subject: &str) -> bool {
        self.subjects.contains(&subject)
    }
}

const COURSES: &[Course] = &[
    Course {
        id: "technical",
        label: "Technical Report Writing",
        subjects: &["Short Reports", "Annual Reports", "Presentations"],
    },
    Course {
        id: "english",
        label: "English Literature",
        subjects: &["Poetry", "Short Stories", "Drama"],
    },
    Course {
        id: "computer",
        label: "Computer Sciences",
        subjects: &[
            "Web Development",
            "Desktop Software Development",
            "Research and Analysis",
        ],
    },
];

/// Calendar days on which any course may begin.
const INCLUDED_DATES: &[&str] = &["Fri Dec 20 2019", "Wed Jan 15 2020", "Sat Feb 01 2020"];

/// Read-only mapping from course id to its label and subjects.
#[derive(Debug, Clone, Copy)]
pub struct CourseCatalog {
    courses: &'static [Course],
}

impl Default for CourseCatalog {
    fn default() -> Self {
        Self { courses: COURSES }
    }
}

impl CourseCatalog {
    pub fn get(&self, id: &str) -> Option<&'static Course> {
        self.courses.iter().find(|course| course.id == id)
    }

    /// Courses in display order.
    pub fn iter(&self) -> std::slice::Iter<'static, Course> {
        self.courses.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = &'static str> + use<> {
        self.courses.iter().map(|course| course.id)
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}

/// The fixed set of start dates, stored as calendar-day strings
/// ("Fri Dec 20 2019").
#[derive(Debug, Clone, Copy)]
pub struct AllowedStartDates {
    days: &'static [&'static str],
}

impl Default for AllowedStartDates {
    fn default() -> Self {
        Self {
            days: INCLUDED_DATES,
        }
    }
}

impl AllowedStartDates {
    /// Exact string membership against a calendar-day string.
    pub fn contains(&self, day: &str) -> bool {
        self.days.contains(&day)
    }

    pub fn allows(&self, date: Date) -> bool {
        calendar_day(date)
            .map(|day| self.contains(&day))
            .unwrap_or(false)
    }

    pub fn as_strs(&self) -> &'static [&'static str] {
        self.days
    }

    /// Parse every allowed day into a `Date`.
    pub fn dates(&self) -> anyhow::Result<Vec<Date>> {
        self.days.iter().map(|day| parse_calendar_day(day)).collect()
    }
}
