//! Entity naming for rendered output.

use oxowl::{Entity, EntityRef};
use oxrdf::{IriParseError, NamedNode};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::Arc;

/// Maps an entity to the name printed in its place.
///
/// The entity kind is available so that implementations may name a class and a property
/// sharing the same IRI differently.
pub trait ShortFormProvider {
    fn short_form(&self, entity: EntityRef<'_>) -> String;
}

impl<P: ShortFormProvider + ?Sized> ShortFormProvider for &P {
    fn short_form(&self, entity: EntityRef<'_>) -> String {
        (**self).short_form(entity)
    }
}

impl<P: ShortFormProvider + ?Sized> ShortFormProvider for Box<P> {
    fn short_form(&self, entity: EntityRef<'_>) -> String {
        (**self).short_form(entity)
    }
}

impl<P: ShortFormProvider + ?Sized> ShortFormProvider for Arc<P> {
    fn short_form(&self, entity: EntityRef<'_>) -> String {
        (**self).short_form(entity)
    }
}

/// Prints the full IRI between angle brackets, e.g. `<http://example.com/Person>`.
///
/// This is the default provider: its output always parses back to the same entity.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuotedIriShortFormProvider;

impl ShortFormProvider for QuotedIriShortFormProvider {
    fn short_form(&self, entity: EntityRef<'_>) -> String {
        entity.iri().to_string()
    }
}

/// Prints the IRI local name, e.g. `Person` for `http://example.com#Person`.
///
/// Falls back to the quoted IRI when the IRI has no usable local name.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleShortFormProvider;

impl ShortFormProvider for SimpleShortFormProvider {
    fn short_form(&self, entity: EntityRef<'_>) -> String {
        let iri = entity.iri();
        let (_, local) = split_iri(iri.as_str());
        if local.is_empty() {
            iri.to_string()
        } else {
            local.into()
        }
    }
}

/// Prints prefixed names such as `owl:Thing` or `:Person` for the default prefix.
///
/// When several namespaces match, the longest one wins.
/// IRIs matching no namespace, or leaving a remainder that is not a valid local name,
/// are printed as quoted IRIs.
///
/// ```
/// use oxmanchester::{PrefixShortFormProvider, ShortFormProvider};
/// use oxowl::{EntityRef, OwlClass};
/// use oxrdf::NamedNode;
///
/// let provider = PrefixShortFormProvider::new()
///     .with_prefix("schema", "http://schema.org/")?
///     .with_default_prefix("http://example.com/")?;
/// let person = OwlClass::new(NamedNode::new("http://schema.org/Person")?);
/// assert_eq!(provider.short_form(EntityRef::Class(&person)), "schema:Person");
/// let dog = OwlClass::new(NamedNode::new("http://example.com/Dog")?);
/// assert_eq!(provider.short_form(EntityRef::Class(&dog)), ":Dog");
/// # Result::<_,Box<dyn std::error::Error>>::Ok(())
/// ```
#[derive(Debug, Clone, Default)]
#[must_use]
pub struct PrefixShortFormProvider {
    /// Namespace IRI to prefix name
    prefixes: BTreeMap<String, String>,
}

impl PrefixShortFormProvider {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the prefixes `owl:`, `rdf:`, `rdfs:` and `xsd:`.
    #[inline]
    pub fn with_standard_prefixes(mut self) -> Self {
        for (name, namespace) in [
            ("owl", "http://www.w3.org/2002/07/owl#"),
            ("rdf", "http://www.w3.org/1999/02/22-rdf-syntax-ns#"),
            ("rdfs", "http://www.w3.org/2000/01/rdf-schema#"),
            ("xsd", "http://www.w3.org/2001/XMLSchema#"),
        ] {
            self.prefixes.insert(namespace.into(), name.into());
        }
        self
    }

    /// Registers a prefix. A namespace registered twice keeps the last name.
    #[inline]
    pub fn with_prefix(
        mut self,
        prefix_name: impl Into<String>,
        namespace: impl Into<String>,
    ) -> Result<Self, IriParseError> {
        let namespace = NamedNode::new(namespace)?;
        self.prefixes
            .insert(namespace.into_string(), prefix_name.into());
        Ok(self)
    }

    /// Registers the empty prefix, rendered as `:local`.
    #[inline]
    pub fn with_default_prefix(self, namespace: impl Into<String>) -> Result<Self, IriParseError> {
        self.with_prefix("", namespace)
    }

    /// Returns the registered namespace to prefix name mapping.
    pub fn prefixes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.prefixes
            .iter()
            .map(|(namespace, name)| (name.as_str(), namespace.as_str()))
    }
}

impl ShortFormProvider for PrefixShortFormProvider {
    fn short_form(&self, entity: EntityRef<'_>) -> String {
        let iri = entity.iri().as_str();
        self.prefixes
            .iter()
            .filter_map(|(namespace, name)| {
                let local = iri.strip_prefix(namespace.as_str())?;
                is_local_name(local).then_some((namespace.len(), name, local))
            })
            .max_by_key(|(len, _, _)| *len)
            .map_or_else(
                || entity.iri().to_string(),
                |(_, name, local)| format!("{name}:{local}"),
            )
    }
}

/// Caches the short forms of a known set of entities and supports the reverse lookup
/// from a short form to the entities it names.
///
/// Entities outside the cached set are delegated to the wrapped provider.
///
/// ```
/// use oxmanchester::{BidirectionalShortFormProvider, ShortFormProvider, SimpleShortFormProvider};
/// use oxowl::{Entity, ObjectProperty, OwlClass};
/// use oxrdf::NamedNode;
///
/// let class = Entity::Class(OwlClass::new(NamedNode::new("http://example.com/a#knows")?));
/// let property = Entity::ObjectProperty(ObjectProperty::new(NamedNode::new("http://example.com/b#knows")?));
/// let provider = BidirectionalShortFormProvider::new(SimpleShortFormProvider, [class.clone(), property.clone()]);
/// assert_eq!(provider.short_form(class.as_ref()), "knows");
/// assert_eq!(provider.entities("knows").count(), 2);
/// assert_eq!(provider.entity("knows"), None); // ambiguous
/// # Result::<_,Box<dyn std::error::Error>>::Ok(())
/// ```
#[derive(Debug, Clone)]
pub struct BidirectionalShortFormProvider<P> {
    provider: P,
    short_forms: HashMap<Entity, String>,
    entities: HashMap<String, BTreeSet<Entity>>,
}

impl<P: ShortFormProvider> BidirectionalShortFormProvider<P> {
    pub fn new(provider: P, entities: impl IntoIterator<Item = Entity>) -> Self {
        let mut this = Self {
            provider,
            short_forms: HashMap::new(),
            entities: HashMap::new(),
        };
        for entity in entities {
            this.add(entity);
        }
        this
    }

    /// Adds an entity to the cached set, computing its short form.
    pub fn add(&mut self, entity: Entity) {
        if self.short_forms.contains_key(&entity) {
            return;
        }
        let short_form = self.provider.short_form(entity.as_ref());
        self.entities
            .entry(short_form.clone())
            .or_default()
            .insert(entity.clone());
        self.short_forms.insert(entity, short_form);
    }

    /// Removes an entity from the cached set.
    pub fn remove(&mut self, entity: &Entity) {
        let Some(short_form) = self.short_forms.remove(entity) else {
            return;
        };
        if let Some(entities) = self.entities.get_mut(&short_form) {
            entities.remove(entity);
            if entities.is_empty() {
                self.entities.remove(&short_form);
            }
        }
    }

    /// All cached entities printed as `short_form`.
    pub fn entities(&self, short_form: &str) -> impl Iterator<Item = &Entity> {
        self.entities.get(short_form).into_iter().flatten()
    }

    /// The cached entity printed as `short_form`, if it is the only one.
    pub fn entity(&self, short_form: &str) -> Option<&Entity> {
        let entities = self.entities.get(short_form)?;
        if entities.len() == 1 {
            entities.first()
        } else {
            None
        }
    }

    /// Every short form of the cached entities.
    pub fn short_forms(&self) -> impl Iterator<Item = &str> {
        self.entities.keys().map(String::as_str)
    }
}

impl<P: ShortFormProvider> ShortFormProvider for BidirectionalShortFormProvider<P> {
    fn short_form(&self, entity: EntityRef<'_>) -> String {
        self.short_forms
            .get(&entity.into_owned())
            .cloned()
            .unwrap_or_else(|| self.provider.short_form(entity))
    }
}

fn split_iri(iri: &str) -> (&str, &str) {
    if let Some(position_base) = iri.rfind(|c| !is_name_char(c)) {
        if let Some(position_add) = iri[position_base..].find(is_name_start_char) {
            (
                &iri[..position_base + position_add],
                &iri[position_base + position_add..],
            )
        } else {
            (iri, "")
        }
    } else {
        (iri, "")
    }
}

fn is_local_name(local: &str) -> bool {
    let mut chars = local.chars();
    chars.next().is_some_and(|c| is_name_start_char(c) || c.is_ascii_digit())
        && chars.all(is_name_char)
}

fn is_name_start_char(c: char) -> bool {
    matches!(c,
        'A'..='Z'
        | '_'
        | 'a'..='z'
        | '\u{00C0}'..='\u{00D6}'
        | '\u{00D8}'..='\u{00F6}'
        | '\u{00F8}'..='\u{02FF}'
        | '\u{0370}'..='\u{037D}'
        | '\u{037F}'..='\u{1FFF}'
        | '\u{200C}'..='\u{200D}'
        | '\u{2070}'..='\u{218F}'
        | '\u{2C00}'..='\u{2FEF}'
        | '\u{3001}'..='\u{D7FF}'
        | '\u{F900}'..='\u{FDCF}'
        | '\u{FDF0}'..='\u{FFFD}'
        | '\u{10000}'..='\u{EFFFF}')
}

fn is_name_char(c: char) -> bool {
    is_name_start_char(c)
        || matches!(c, '-' | '.' | '0'..='9' | '\u{B7}' | '\u{0300}'..='\u{036F}' | '\u{203F}'..='\u{2040}')
}
