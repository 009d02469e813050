//! Tests for the Twilio client
