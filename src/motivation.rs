// ABOUTME: Daily motivation quote selection
// ABOUTME: Deterministic day-of-year rotation over a fixed quote list
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forma Coach Contributors

//! Daily motivation quote
//!
//! Same quote for everyone on a given day: index is the day of the year
//! modulo the list length.

use chrono::{DateTime, Datelike, Utc};

/// The fixed quote rotation
const MOTIVATION_QUOTES: &[&str] = &[
    "The only bad workout is the one you didn't do.",
    "Your body can stand almost anything. It's your mind that you need to convince.",
    "Success is not final, failure is not fatal: it is the courage to continue that counts.",
    "The pain you feel today will be the strength you feel tomorrow.",
    "Believe in yourself and you're halfway there.",
    "Push yourself, because no one else is going to do it for you.",
    "Fitness is not about being better than someone else. It's about being better than you used to be.",
    "Your future self will thank you for the work you put in today.",
    "Don't stop when you're tired. Stop when you're done.",
    "Every rep, every mile, every bead of sweat brings you closer to your goal.",
    "The hardest part is starting. Keep going.",
    "Strong is the new skinny.",
    "You don't have to be great to start, but you have to start to be great.",
    "Excellence is not a destination; it is a continuous journey that never ends.",
    "No pain, no gain - but that pain means something.",
];

/// Quote for a specific date
#[must_use]
pub fn quote_for(date: DateTime<Utc>) -> &'static str {
    let index = date.ordinal() as usize % MOTIVATION_QUOTES.len();
    MOTIVATION_QUOTES[index]
}

/// Today's quote
#[must_use]
pub fn daily_quote() -> &'static str {
    quote_for(Utc::now())
}
