//! Date/time types, compared as instants.
//!
//! Values without an offset are read as UTC. Offset-aware values are
//! converted to UTC, so two values naming the same instant at different
//! offsets are equal.

use std::time::SystemTime;

use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};

use crate::comparable::{downcast_eq, Comparable};
use crate::{TypeDescriptor, TypeKind};

macro_rules! temporal_impl {
    ($ty:ty, $kind:ident, |$value:ident| $instant:expr) => {
        impl Comparable for $ty {
            fn descriptor() -> TypeDescriptor {
                TypeDescriptor::of::<$ty>(TypeKind::$kind)
            }

            fn render(&self) -> String {
                self.to_string()
            }

            fn native_eq(&self, other: &dyn Comparable) -> bool {
                downcast_eq(self, other)
            }

            fn instant(&self) -> Option<DateTime<Utc>> {
                let $value = self;
                Some($instant)
            }
        }
    };
}

temporal_impl!(NaiveDateTime, DateTime, |value| Utc.from_utc_datetime(value));
temporal_impl!(NaiveDate, DateTime, |value| Utc
    .from_utc_datetime(&value.and_time(NaiveTime::MIN)));
temporal_impl!(DateTime<Utc>, DateTime, |value| *value);
temporal_impl!(DateTime<FixedOffset>, DateTimeOffset, |value| value
    .with_timezone(&Utc));
temporal_impl!(DateTime<Local>, DateTimeOffset, |value| value.with_timezone(&Utc));

impl Comparable for SystemTime {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::of::<SystemTime>(TypeKind::DateTime)
    }

    fn render(&self) -> String {
        DateTime::<Utc>::from(*self).to_rfc3339()
    }

    fn native_eq(&self, other: &dyn Comparable) -> bool {
        downcast_eq(self, other)
    }

    fn instant(&self) -> Option<DateTime<Utc>> {
        Some(DateTime::<Utc>::from(*self))
    }
}
