//! Recursive records
//!
//! Expressions, declarations and type projections are the records that nest.
//! Their serde impls and their teardown run on a grown stack, so decoding a
//! record is bounded by the heap rather than by the calling thread's stack.
//! The encoded form is the same as a derived struct impl.

/// Serialize, Deserialize and Drop for a recursive record struct. Every field
/// type must implement `Default`.
macro_rules! nested_record {
    ($record:ident { $($field:ident: $ty:ty),+ $(,)? }) => {
        impl serde::Serialize for $record {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                use serde::ser::SerializeStruct;
                strata_ir::stack::grow(|| {
                    let fields = [$(stringify!($field)),+];
                    let mut state = serializer.serialize_struct(stringify!($record), fields.len())?;
                    $(state.serialize_field(stringify!($field), &self.$field)?;)+
                    state.end()
                })
            }
        }

        impl<'de> serde::Deserialize<'de> for $record {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                #[derive(serde::Deserialize)]
                struct Fields {
                    $($field: $ty),+
                }

                let fields = strata_ir::stack::grow(|| {
                    <Fields as serde::Deserialize<'de>>::deserialize(deserializer)
                })?;
                Ok($record { $($field: fields.$field),+ })
            }
        }

        impl Drop for $record {
            fn drop(&mut self) {
                let fields = ($(std::mem::take(&mut self.$field),)+);
                strata_ir::stack::grow(move || drop(fields));
            }
        }
    };
}
