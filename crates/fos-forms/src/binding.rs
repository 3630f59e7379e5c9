//! Struct Binding
//!
//! Moves values between a typed record and the elements of a form through an
//! explicit table of field bindings. Binding keys are element names.

use crate::Form;

/// Conversion between a record field and an element value
pub trait BindValue: Sized {
    fn to_form_value(&self) -> String;

    /// `None` leaves the bound field untouched
    fn from_form_value(value: &str) -> Option<Self>;
}

impl BindValue for String {
    fn to_form_value(&self) -> String {
        self.clone()
    }

    fn from_form_value(value: &str) -> Option<Self> {
        Some(value.to_string())
    }
}

/// Lists travel as `", "`-joined text
impl BindValue for Vec<String> {
    fn to_form_value(&self) -> String {
        self.join(", ")
    }

    fn from_form_value(value: &str) -> Option<Self> {
        Some(
            value
                .split(", ")
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .map(String::from)
                .collect(),
        )
    }
}

impl<T: BindValue> BindValue for Option<T> {
    fn to_form_value(&self) -> String {
        self.as_ref().map(T::to_form_value).unwrap_or_default()
    }

    fn from_form_value(value: &str) -> Option<Self> {
        T::from_form_value(value).map(Some)
    }
}

/// Accepts checkbox-style values as well as `true`/`false`
impl BindValue for bool {
    fn to_form_value(&self) -> String {
        self.to_string()
    }

    fn from_form_value(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "on" | "true" | "yes" | "1" => Some(true),
            "off" | "false" | "no" | "0" => Some(false),
            _ => None,
        }
    }
}

macro_rules! bind_from_str {
    ($($ty:ty),* $(,)?) => {
        $(
            impl BindValue for $ty {
                fn to_form_value(&self) -> String {
                    self.to_string()
                }

                fn from_form_value(value: &str) -> Option<Self> {
                    value.trim().parse().ok()
                }
            }
        )*
    };
}

bind_from_str!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

type Reader<T> = Box<dyn Fn(&T) -> String + Send + Sync>;
type Writer<T> = Box<dyn Fn(&mut T, &str) -> bool + Send + Sync>;

struct Binding<T> {
    field: String,
    read: Reader<T>,
    write: Writer<T>,
}

/// Binding table for a record type
pub struct Bindings<T> {
    bindings: Vec<Binding<T>>,
}

impl<T: 'static> Bindings<T> {
    pub fn new() -> Self {
        Self {
            bindings: Vec::new(),
        }
    }

    /// Bind the element named `field` to the record field reached by `get`/`get_mut`
    pub fn bind<V: BindValue + 'static>(
        mut self,
        field: &str,
        get: fn(&T) -> &V,
        get_mut: fn(&mut T) -> &mut V,
    ) -> Self {
        self.bindings.push(Binding {
            field: field.to_string(),
            read: Box::new(move |record: &T| get(record).to_form_value()),
            write: Box::new(move |record: &mut T, value: &str| match V::from_form_value(value) {
                Some(converted) => {
                    *get_mut(record) = converted;
                    true
                }
                None => false,
            }),
        });
        self
    }
}

impl<T> Bindings<T> {
    /// Bound element names, in binding order
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.bindings.iter().map(|binding| binding.field.as_str())
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl<T: 'static> Default for Bindings<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for Bindings<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.bindings.iter().map(|binding| &binding.field))
            .finish()
    }
}

/// Record type with a binding table
pub trait Bindable: Sized + 'static {
    fn bindings() -> Bindings<Self>;
}

impl Form {
    /// Copy element values into `record`
    pub fn populate<T: Bindable>(&self, record: &mut T) {
        self.populate_with(record, &T::bindings());
    }

    /// Copy element values into `record` through `bindings`.
    ///
    /// A field is left untouched when no element has its name, the element
    /// value is empty, or the value does not convert.
    pub fn populate_with<T: 'static>(&self, record: &mut T, bindings: &Bindings<T>) {
        let elements = self.elements();
        let mut bound = 0;

        for binding in &bindings.bindings {
            let Some(element) = elements.get(binding.field.as_str()) else {
                tracing::trace!("No element for bound field {}", binding.field);
                continue;
            };
            if element.value().is_empty() {
                continue;
            }
            if (binding.write)(record, element.value()) {
                bound += 1;
            } else {
                tracing::trace!("Could not convert value of {}", binding.field);
            }
        }

        tracing::debug!("Bound {} of {} fields from form", bound, bindings.len());
    }

    /// Push every bound field of `record` into its element, then revalidate
    pub fn populate_from_struct<T: Bindable>(&mut self, record: &T) -> &mut Self {
        self.populate_from_struct_with(record, &T::bindings())
    }

    pub fn populate_from_struct_with<T: 'static>(
        &mut self,
        record: &T,
        bindings: &Bindings<T>,
    ) -> &mut Self {
        {
            let mut elements = self.elements_mut();
            for binding in &bindings.bindings {
                if let Some(element) = elements.get_mut(binding.field.as_str()) {
                    let value = (binding.read)(record);
                    tracing::trace!("Setting {} from record", binding.field);
                    element.set_value(&value);
                }
            }
        }

        let invalid = self.revalidate();
        tracing::debug!("Populated form from record, {} invalid", invalid);
        self
    }
}
