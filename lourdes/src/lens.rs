//! Getter/setter lenses.
//!
//! A lens focuses on one part `A` of a whole `S`. Lenses built here obey
//! the usual laws:
//!
//! 1. get-put: `lens.set(s, lens.get(&s).clone()) == s`
//! 2. put-get: `lens.get(&lens.set(s, a)) == &a`
//! 3. put-put: `lens.set(lens.set(s, a1), a2) == lens.set(s, a2)`
//!
//! [`lens_prop`] and [`lens_props`] focus on keys of dynamic JSON objects.
//! They follow the laws for keys that are present.

use serde_json::{Map, Value};
use std::fmt;
use std::marker::PhantomData;

/// Focus on a single part `A` of a structure `S`.
pub trait Lens<S, A> {
    fn get<'a>(&self, source: &'a S) -> &'a A;

    /// Replace the focused part, returning the updated whole.
    fn set(&self, source: S, value: A) -> S;

    /// Owned copy of the focused part.
    fn view(&self, source: &S) -> A
    where
        A: Clone,
    {
        self.get(source).clone()
    }

    /// Apply `function` to the focused part.
    fn over<F>(&self, source: S, function: F) -> S
    where
        Self: Sized,
        F: FnOnce(A) -> A,
        A: Clone,
    {
        let current = self.view(&source);
        self.set(source, function(current))
    }

    /// Focus further into the part with `inner`.
    fn compose<B, L>(self, inner: L) -> Composed<Self, L, A>
    where
        Self: Sized,
        L: Lens<A, B>,
    {
        Composed {
            outer: self,
            inner,
            _focus: PhantomData,
        }
    }
}

/// Lens built from a getter and a setter closure.
pub struct FnLens<S, A, G, St> {
    getter: G,
    setter: St,
    _marker: PhantomData<fn(S) -> A>,
}

impl<S, A, G, St> FnLens<S, A, G, St>
where
    G: Fn(&S) -> &A,
    St: Fn(S, A) -> S,
{
    pub const fn new(getter: G, setter: St) -> Self {
        Self {
            getter,
            setter,
            _marker: PhantomData,
        }
    }
}

impl<S, A, G, St> Lens<S, A> for FnLens<S, A, G, St>
where
    G: Fn(&S) -> &A,
    St: Fn(S, A) -> S,
{
    fn get<'a>(&self, source: &'a S) -> &'a A {
        (self.getter)(source)
    }

    fn set(&self, source: S, value: A) -> S {
        (self.setter)(source, value)
    }
}

impl<S, A, G: Clone, St: Clone> Clone for FnLens<S, A, G, St> {
    fn clone(&self) -> Self {
        Self {
            getter: self.getter.clone(),
            setter: self.setter.clone(),
            _marker: PhantomData,
        }
    }
}

impl<S, A, G, St> fmt::Debug for FnLens<S, A, G, St> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnLens").finish_non_exhaustive()
    }
}

/// Two lenses chained: `outer` focuses `S -> A`, `inner` focuses `A -> B`.
pub struct Composed<Outer, Inner, A> {
    outer: Outer,
    inner: Inner,
    _focus: PhantomData<fn() -> A>,
}

impl<S, A, B, Outer, Inner> Lens<S, B> for Composed<Outer, Inner, A>
where
    Outer: Lens<S, A>,
    Inner: Lens<A, B>,
    A: Clone + 'static,
{
    fn get<'a>(&self, source: &'a S) -> &'a B {
        self.inner.get(self.outer.get(source))
    }

    fn set(&self, source: S, value: B) -> S {
        let part = self.outer.view(&source);
        self.outer.set(source, self.inner.set(part, value))
    }
}

impl<S, A, L: Lens<S, A> + ?Sized> Lens<S, A> for Box<L> {
    fn get<'a>(&self, source: &'a S) -> &'a A {
        (**self).get(source)
    }

    fn set(&self, source: S, value: A) -> S {
        (**self).set(source, value)
    }
}

/// Lens focusing on the whole structure.
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl<S> Lens<S, S> for Identity {
    fn get<'a>(&self, source: &'a S) -> &'a S {
        source
    }

    fn set(&self, _source: S, value: S) -> S {
        value
    }
}

static MISSING: Value = Value::Null;

/// Lens on one key of a JSON object.
///
/// A missing key reads as `null`. Setting on a value that is not an object
/// replaces it with a single-key object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prop {
    key: String,
}

impl Lens<Value, Value> for Prop {
    fn get<'a>(&self, source: &'a Value) -> &'a Value {
        source.get(self.key.as_str()).unwrap_or(&MISSING)
    }

    fn set(&self, source: Value, value: Value) -> Value {
        let mut object = match source {
            Value::Object(object) => object,
            _ => Map::new(),
        };
        object.insert(self.key.clone(), value);
        Value::Object(object)
    }
}

/// Lens on the property `key` of a JSON object.
pub fn lens_prop(key: impl Into<String>) -> Prop {
    Prop { key: key.into() }
}

/// Lens on a nested property path, one [`Prop`] per key composed left to
/// right. Siblings along the path are kept on `set`; missing levels are
/// created as objects. An empty path focuses on the whole value.
pub fn lens_props<I>(path: I) -> Box<dyn Lens<Value, Value>>
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    let whole: Box<dyn Lens<Value, Value>> = Box::new(Identity);
    path.into_iter()
        .map(lens_prop)
        .fold(whole, |focus, prop| Box::new(focus.compose(prop)))
}

/// Build a lens from a getter and a setter.
pub const fn lens<S, A, G, St>(getter: G, setter: St) -> FnLens<S, A, G, St>
where
    G: Fn(&S) -> &A,
    St: Fn(S, A) -> S,
{
    FnLens::new(getter, setter)
}

/// Owned copy of the part `lens` focuses on.
pub fn view<S, A: Clone, L: Lens<S, A>>(lens: &L, source: &S) -> A {
    lens.view(source)
}

/// Update the part `lens` focuses on with `function`.
pub fn over<S, A, L, F>(lens: &L, function: F, source: S) -> S
where
    A: Clone,
    L: Lens<S, A>,
    F: FnOnce(A) -> A,
{
    lens.over(source, function)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Clone, PartialEq)]
    struct Address {
        street: String,
        city: String,
    }

    #[derive(Debug, Clone, PartialEq)]
    struct Person {
        name: String,
        age: u32,
        address: Address,
    }

    fn alice() -> Person {
        Person {
            name: "alice".to_string(),
            age: 30,
            address: Address {
                street: "Main St".to_string(),
                city: "Lourdes".to_string(),
            },
        }
    }

    fn age() -> impl Lens<Person, u32> {
        lens(|p: &Person| &p.age, |p: Person, age| Person { age, ..p })
    }

    fn address() -> impl Lens<Person, Address> {
        lens(
            |p: &Person| &p.address,
            |p: Person, address| Person { address, ..p },
        )
    }

    fn city() -> impl Lens<Address, String> {
        lens(
            |a: &Address| &a.city,
            |a: Address, city| Address { city, ..a },
        )
    }

    #[test]
    fn get_and_set() {
        assert_eq!(*age().get(&alice()), 30);
        assert_eq!(age().set(alice(), 31).age, 31);
    }

    #[test]
    fn view_and_over() {
        assert_eq!(view(&age(), &alice()), 30);
        let older = over(&age(), |a: u32| a + 1, alice());
        assert_eq!(older.age, 31);
        assert_eq!(older.name, "alice");
    }

    #[test]
    fn laws() {
        let l = age();
        let current = *l.get(&alice());
        assert_eq!(l.set(alice(), current), alice());
        assert_eq!(*l.get(&l.set(alice(), 7)), 7);
        assert_eq!(l.set(l.set(alice(), 7), 8), l.set(alice(), 8));
    }

    #[test]
    fn composed() {
        let person_city = address().compose(city());
        assert_eq!(person_city.get(&alice()), "Lourdes");

        let moved = person_city.set(alice(), "Pau".to_string());
        assert_eq!(moved.address.city, "Pau");
        assert_eq!(moved.address.street, "Main St");

        let shouted = person_city.over(alice(), |c: String| c.to_uppercase());
        assert_eq!(shouted.address.city, "LOURDES");
    }

    #[test]
    fn composed_laws() {
        let l = address().compose(city());
        let current = l.view(&alice());
        assert_eq!(l.set(alice(), current), alice());
        assert_eq!(l.get(&l.set(alice(), "Pau".to_string())), "Pau");
    }

    fn user() -> Value {
        json!({"id": 1, "email": "dc@davidchambers.me"})
    }

    #[test]
    fn prop_view_and_over() {
        let email = lens_prop("email");
        assert_eq!(view(&email, &user()), json!("dc@davidchambers.me"));

        let shouted = over(
            &email,
            |v: Value| json!(v.as_str().unwrap_or_default().to_uppercase()),
            user(),
        );
        assert_eq!(shouted, json!({"id": 1, "email": "DC@DAVIDCHAMBERS.ME"}));
    }

    #[test]
    fn prop_missing_key_and_non_object() {
        let name = lens_prop("name");
        assert_eq!(name.get(&user()), &Value::Null);
        assert_eq!(name.set(json!(3), json!("bob")), json!({"name": "bob"}));
    }

    #[test]
    fn props_path() {
        let example = json!({"a": {"b": {"c": 1}}});
        let abc = lens_props(["a", "b", "c"]);

        assert_eq!(view(&abc, &example), json!(1));
        let bumped = over(&abc, |n: Value| json!(n.as_i64().unwrap_or_default() + 1), example);
        assert_eq!(bumped, json!({"a": {"b": {"c": 2}}}));
    }

    #[test]
    fn props_keep_siblings_and_create_levels() {
        let abc = lens_props(vec!["a".to_string(), "b".to_string(), "c".to_string()]);
        let wide = json!({"a": {"b": {"c": 1, "d": 0}, "e": true}, "f": []});
        assert_eq!(
            abc.set(wide, json!(5)),
            json!({"a": {"b": {"c": 5, "d": 0}, "e": true}, "f": []})
        );
        assert_eq!(abc.set(json!({}), json!(5)), json!({"a": {"b": {"c": 5}}}));
    }

    #[test]
    fn empty_path_is_identity() {
        let whole = lens_props(Vec::<String>::new());
        assert_eq!(whole.get(&user()), &user());
        assert_eq!(whole.set(user(), json!(null)), Value::Null);
    }
}
