// SPDX-FileCopyrightText: Biyebari Contributors
//
// SPDX-License-Identifier: MIT

/// Allows to create one or more typed ids
///
/// Defines the type and implements a variety of traits for it to be usable with diesel.
/// See <https://stackoverflow.com/a/59948116> for more information.
#[macro_export]
macro_rules! diesel_newtype {
    ($($(#[$meta:meta])* $name:ident($to_wrap:ty) => $sql_type:ty),+ $(,)?) => {
        $(
            pub use __newtype_impl::$name;
        )+

        mod __newtype_impl {
            use diesel::deserialize::{self, FromSql, FromSqlRow};
            use diesel::expression::AsExpression;
            use diesel::pg::{Pg, PgValue};
            use diesel::serialize::{self, Output, ToSql};
            use serde::{Deserialize, Serialize};
            use std::fmt;

            $(

            #[derive(
                Debug,
                Clone,
                PartialEq,
                Eq,
                PartialOrd,
                Ord,
                Hash,
                Serialize,
                Deserialize,
                AsExpression,
                FromSqlRow,
            )]
            $(#[$meta])*
            #[diesel(sql_type = $sql_type)]
            pub struct $name($to_wrap);

            impl $name {
                pub const fn from(inner: $to_wrap) -> Self {
                    Self(inner)
                }

                pub fn inner(&self) -> &$to_wrap {
                    &self.0
                }

                pub fn into_inner(self) -> $to_wrap {
                    self.0
                }
            }

            impl fmt::Display for $name {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    self.0.fmt(f)
                }
            }

            impl ToSql<$sql_type, Pg> for $name
            where
                $to_wrap: ToSql<$sql_type, Pg>,
            {
                fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Pg>) -> serialize::Result {
                    <$to_wrap as ToSql<$sql_type, Pg>>::to_sql(&self.0, out)
                }
            }

            impl FromSql<$sql_type, Pg> for $name
            where
                $to_wrap: FromSql<$sql_type, Pg>,
            {
                fn from_sql(value: PgValue<'_>) -> deserialize::Result<Self> {
                    <$to_wrap as FromSql<$sql_type, Pg>>::from_sql(value).map(Self)
                }
            }

            )+
        }
    };
}

/// Defines an enum stored as a PostgreSQL enum type
///
/// Generates the diesel SqlType marker struct for use in `schema.rs` and the
/// To/FromSql impls mapping the Rust variants onto the SQL enum labels.
#[macro_export]
macro_rules! sql_enum {
    (
        $(#[$enum_meta:meta])*
        $enum_name:ident,
        $sql_name:literal,
        $type_name:ident,
        {
            $($variant:ident = $variant_bytes:literal),+ $(,)?
        }
    ) => {
        #[derive(diesel::sql_types::SqlType, diesel::query_builder::QueryId)]
        #[diesel(postgres_type(name = $sql_name))]
        pub struct $type_name;

        $(#[$enum_meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, diesel::expression::AsExpression, diesel::deserialize::FromSqlRow)]
        #[diesel(sql_type = $type_name)]
        pub enum $enum_name {
            $($variant),+
        }

        impl diesel::serialize::ToSql<$type_name, diesel::pg::Pg> for $enum_name {
            fn to_sql<'b>(
                &'b self,
                out: &mut diesel::serialize::Output<'b, '_, diesel::pg::Pg>,
            ) -> diesel::serialize::Result {
                use std::io::Write as _;

                match *self {
                    $(Self::$variant => out.write_all($variant_bytes)?,)+
                }

                Ok(diesel::serialize::IsNull::No)
            }
        }

        impl diesel::deserialize::FromSql<$type_name, diesel::pg::Pg> for $enum_name {
            fn from_sql(value: diesel::pg::PgValue<'_>) -> diesel::deserialize::Result<Self> {
                match value.as_bytes() {
                    $($variant_bytes => Ok(Self::$variant),)+
                    _ => Err("Unrecognized enum variant".into()),
                }
            }
        }
    };
}
