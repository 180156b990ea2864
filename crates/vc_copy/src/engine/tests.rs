use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::cell::Cell;
use std::collections::HashMap;

use vc_reflect::Reflect;
use vc_reflect::derive::Reflect;
use vc_reflect::ops::{BridgeError, Dynamic, Scanner, Valuer};

use crate::{
    BoxedError, Copier, ConverterRegistry, CopyError, CopyOptions, TagError, TypePair, TypedCopier,
    copy, copy_with_options,
};

// -----------------------------------------------------------------------------
// Tags

#[derive(Reflect, Clone, Default, Debug)]
struct EmployeeTags {
    #[reflect(tag(copier = "must"))]
    name: String,
    dob: String,
    address: String,
    #[reflect(tag(copier = "-"))]
    id: i32,
    #[reflect(tag(copier = "Differ1"))]
    field_differ_a: String,
    #[reflect(tag(copier = "Differ2"))]
    field_differ_b: String,
}

#[derive(Reflect, Clone, Default, Debug)]
struct User1 {
    name: String,
    dob: String,
    address: String,
    id: i32,
    differ1: String,
    #[reflect(tag(copier = "Differ2"))]
    field_differ2: String,
}

#[derive(Reflect, Clone, Default, Debug)]
struct User2 {
    dob: String,
    address: String,
    id: i32,
}

fn user1() -> User1 {
    User1 {
        name: "Dexter Ledesma".into(),
        dob: "1 November, 1970".into(),
        address: "21 Jump Street, Miami".into(),
        id: 12345,
        differ1: "differ one".into(),
        field_differ2: "differ two".into(),
    }
}

#[test]
fn ignored_field_is_kept() {
    let mut employee = EmployeeTags {
        id: 100,
        ..Default::default()
    };
    copy(&mut employee, &user1()).unwrap();

    assert_eq!(employee.id, 100);
    assert_eq!(employee.name, "Dexter Ledesma");
    assert_eq!(employee.dob, "1 November, 1970");
    assert_eq!(employee.address, "21 Jump Street, Miami");
}

#[test]
#[should_panic(expected = "field Name has must tag but was not copied")]
fn missing_must_field_panics() {
    let user = User2 {
        dob: "1 January 1970".into(),
        address: "Cebu City".into(),
        id: 12345,
    };
    let mut employee = EmployeeTags::default();
    let _ = copy(&mut employee, &user);
}

#[test]
fn aliases_are_matched_both_ways() {
    let user = user1();
    let mut employee = EmployeeTags::default();
    copy(&mut employee, &user).unwrap();
    assert_eq!(employee.field_differ_a, user.differ1);
    assert_eq!(employee.field_differ_b, user.field_differ2);

    let mut back = User1::default();
    copy(&mut back, &employee).unwrap();
    assert_eq!(back.differ1, user.differ1);
    assert_eq!(back.field_differ2, user.field_differ2);
}

#[derive(Reflect, Clone, Default)]
struct LowercaseAlias {
    #[reflect(tag(copier = "differ1"))]
    field_differ_a: String,
}

#[test]
fn lowercase_alias_fails_both_ways() {
    let err = copy(&mut LowercaseAlias::default(), &user1()).unwrap_err();
    assert!(matches!(
        err,
        CopyError::Tag(TagError::LowercaseAlias(ref alias)) if alias == "differ1"
    ));

    let err = copy(&mut User1::default(), &LowercaseAlias::default()).unwrap_err();
    assert!(matches!(err, CopyError::Tag(_)));
}

#[derive(Reflect, Clone, Default)]
struct BlankTag {
    #[reflect(tag(copier = ""))]
    name: String,
    id: i32,
}

#[test]
fn blank_tag_is_no_tag() {
    let mut dst = BlankTag::default();
    copy(&mut dst, &user1()).unwrap();
    assert_eq!(dst.name, "Dexter Ledesma");
    assert_eq!(dst.id, 12345);

    let mut back = User1::default();
    copy(&mut back, &dst).unwrap();
    assert_eq!(back.name, "Dexter Ledesma");
}

#[derive(Reflect, Clone, Default)]
struct Required {
    #[reflect(tag(copier = "must,nopanic"))]
    name: String,
    age: u8,
}

#[derive(Reflect, Clone, Default)]
struct AgeOnly {
    age: u8,
}

#[test]
fn nopanic_returns_an_error() {
    let mut dst = Required::default();
    let err = copy(&mut dst, &AgeOnly { age: 9 }).unwrap_err();

    assert!(matches!(err, CopyError::ObligationUnmet { ref field } if field == "Name"));
    assert_eq!(dst.age, 9);
}

#[derive(Reflect, Clone, Default)]
struct Post {
    #[reflect(tag(copier = "CommentField"))]
    message: String,
}

#[derive(Reflect, Clone, Default)]
struct Reply {
    #[reflect(tag(copier = "CommentField"))]
    comment: String,
}

#[test]
fn shared_alias_connects_fields() {
    let mut reply = Reply::default();
    copy(&mut reply, &Post { message: "hello".into() }).unwrap();
    assert_eq!(reply.comment, "hello");
}

#[derive(Reflect, Clone, Default)]
struct Nickname {
    nick: String,
}

#[derive(Reflect, Clone, Default)]
struct Handles {
    #[reflect(tag(copier = "Nick"))]
    first: String,
    #[reflect(tag(copier = "Nick"))]
    second: String,
    nick: String,
}

#[test]
fn last_alias_wins() {
    let mut handles = Handles::default();
    copy(&mut handles, &Nickname { nick: "neo".into() }).unwrap();

    // the alias shadows the field named `nick`, the later declaration takes it.
    assert_eq!(handles.second, "neo");
    assert!(handles.first.is_empty());
    assert!(handles.nick.is_empty());
}

// -----------------------------------------------------------------------------
// Shapes

#[derive(Reflect, Clone, Default, Debug, PartialEq)]
struct Person {
    name: String,
    age: i32,
}

#[derive(Reflect, Clone, Default, Debug, PartialEq)]
struct Payroll {
    name: String,
    age: i32,
    #[reflect(tag(copier = "-"))]
    bonus: i64,
}

#[test]
fn ignored_bonus_survives() {
    let mut payroll = Payroll {
        bonus: 500,
        ..Default::default()
    };
    copy(&mut payroll, &Person { name: "Ann".into(), age: 30 }).unwrap();

    assert_eq!(
        payroll,
        Payroll {
            name: "Ann".into(),
            age: 30,
            bonus: 500
        }
    );
}

#[test]
fn maps_convert_keys_and_values() {
    let src: HashMap<i32, i32> = HashMap::from([(3, 6), (4, 8)]);
    let mut dst: BTreeMap<i64, i8> = BTreeMap::new();
    copy(&mut dst, &src).unwrap();
    assert_eq!(dst, BTreeMap::from([(3, 6), (4, 8)]));

    let src: HashMap<String, i32> = HashMap::from([("a".into(), 1)]);
    let mut dst: HashMap<i32, i32> = HashMap::new();
    let err = copy(&mut dst, &src).unwrap_err();
    assert!(matches!(err, CopyError::KeyTypeMismatch { .. }));
}

#[test]
fn maps_of_structs() {
    let src: HashMap<String, Person> = HashMap::from([("ann".into(), Person { name: "Ann".into(), age: 30 })]);
    let mut dst: HashMap<String, Option<Box<Payroll>>> = HashMap::new();
    copy(&mut dst, &src).unwrap();

    let payroll = dst["ann"].as_deref().unwrap();
    assert_eq!(payroll.name, "Ann");
    assert_eq!(payroll.age, 30);
}

#[test]
fn struct_lists_grow() {
    let people = Vec::from([
        Person { name: "Ann".into(), age: 30 },
        Person { name: "Bob".into(), age: 41 },
    ]);
    let mut payrolls: Vec<Payroll> = Vec::new();
    copy(&mut payrolls, &people).unwrap();

    assert_eq!(payrolls.len(), 2);
    assert_eq!(payrolls[1].name, "Bob");
    assert_eq!(payrolls[1].age, 41);
}

#[test]
fn scalar_lists_convert() {
    let mut dst: Vec<u8> = Vec::from([9, 9, 9]);
    copy(&mut dst, &Vec::from([1_i64, 2])).unwrap();
    assert_eq!(dst, [1, 2, 9]);
}

#[test]
fn struct_into_list_and_back() {
    let mut payrolls: Vec<Option<Box<Payroll>>> = Vec::new();
    copy(&mut payrolls, &Person { name: "Ann".into(), age: 30 }).unwrap();
    assert_eq!(payrolls.len(), 1);
    assert_eq!(payrolls[0].as_deref().unwrap().name, "Ann");

    let people = Vec::from([
        Person { name: "Ann".into(), age: 30 },
        Person { name: "Bob".into(), age: 41 },
    ]);
    let mut payroll = Payroll::default();
    copy(&mut payroll, &people).unwrap();
    assert_eq!(payroll.name, "Bob");
}

#[test]
fn pointers_are_followed_and_allocated() {
    let src = Some(Box::new(Person { name: "Ann".into(), age: 30 }));
    let mut dst = Box::new(Payroll::default());
    copy(&mut dst, &src).unwrap();
    assert_eq!(dst.name, "Ann");

    let mut slot: Option<i64> = Some(0);
    copy(&mut slot, &7_u8).unwrap();
    assert_eq!(slot, Some(7));
}

#[test]
fn invalid_endpoints() {
    let err = copy(&mut Payroll::default(), &None::<Person>).unwrap_err();
    assert!(matches!(err, CopyError::InvalidSource));

    let err = copy(&mut None::<Box<Payroll>>, &Person::default()).unwrap_err();
    assert!(matches!(err, CopyError::InvalidDestination));
}

#[test]
fn unrelated_shapes_are_ignored() {
    let mut number = 5_i32;
    copy(&mut number, &Person::default()).unwrap();
    assert_eq!(number, 5);

    let mut person = Person::default();
    copy(&mut person, &String::from("x")).unwrap();
    assert_eq!(person, Person::default());
}

#[derive(Reflect, Clone, Default, Debug, PartialEq)]
struct PersonCopy {
    name: String,
    age: i32,
}

#[test]
fn round_trip_is_idempotent() {
    let original = Person { name: "Ann".into(), age: 30 };
    let mut other = PersonCopy::default();
    let mut back = Person::default();

    copy(&mut other, &original).unwrap();
    copy(&mut back, &other).unwrap();
    assert_eq!(back, original);
}

// -----------------------------------------------------------------------------
// Options

#[derive(Reflect, Clone, Default, Debug)]
struct Profile {
    nick: String,
    score: i32,
    pub email: String,
}

#[derive(Reflect, Clone, Default, Debug)]
struct ProfileView {
    nick: String,
    score: i64,
    pub email: String,
}

#[test]
fn ignore_empty_keeps_destination() {
    let src = Profile {
        nick: String::new(),
        score: 3,
        email: "a@b.c".into(),
    };
    let mut dst = ProfileView {
        nick: "kept".into(),
        ..Default::default()
    };

    copy_with_options(&mut dst, &src, CopyOptions::new().with_ignore_empty(true)).unwrap();
    assert_eq!(dst.nick, "kept");
    assert_eq!(dst.score, 3);

    copy(&mut dst, &src).unwrap();
    assert_eq!(dst.nick, "");
}

#[test]
fn ignore_private_fields() {
    let src = Profile {
        nick: "n".into(),
        score: 3,
        email: "a@b.c".into(),
    };
    let mut dst = ProfileView::default();

    copy_with_options(&mut dst, &src, CopyOptions::new().with_ignore_private_fields(true)).unwrap();
    assert_eq!(dst.nick, "");
    assert_eq!(dst.score, 0);
    assert_eq!(dst.email, "a@b.c");
}

#[derive(Reflect, Clone, Default, Debug, PartialEq)]
struct Inner {
    value: i32,
    #[reflect(tag(copier = "-"))]
    local: i32,
}

#[derive(Reflect, Clone, Default, Debug)]
struct Outer {
    inner: Inner,
    shared: Option<Arc<Inner>>,
}

#[test]
fn deep_copy_recurses_into_members() {
    let src = Outer {
        inner: Inner { value: 1, local: 2 },
        shared: Some(Arc::new(Inner { value: 3, local: 4 })),
    };

    let mut shallow = Outer::default();
    copy(&mut shallow, &src).unwrap();
    assert_eq!(shallow.inner.local, 2);
    assert!(Arc::ptr_eq(
        shallow.shared.as_ref().unwrap(),
        src.shared.as_ref().unwrap()
    ));

    let mut deep = Outer::default();
    copy_with_options(&mut deep, &src, CopyOptions::new().with_deep_copy(true)).unwrap();
    assert_eq!(deep.inner, Inner { value: 1, local: 0 });
    assert_eq!(deep.shared.as_deref(), Some(&Inner { value: 3, local: 0 }));
    assert!(!Arc::ptr_eq(
        deep.shared.as_ref().unwrap(),
        src.shared.as_ref().unwrap()
    ));
}

// -----------------------------------------------------------------------------
// Embedded fields

#[derive(Reflect, Clone, Default, Debug)]
struct Audit {
    created_by: String,
    version: u32,
}

#[derive(Reflect, Clone, Default, Debug)]
struct Document {
    #[reflect(embedded)]
    audit: Audit,
    title: String,
}

#[derive(Reflect, Clone, Default, Debug)]
struct DocumentRow {
    #[reflect(embedded)]
    audit: Option<Box<Audit>>,
    title: String,
    version: u64,
}

#[test]
fn promoted_fields_are_matched() {
    let doc = Document {
        audit: Audit {
            created_by: "ann".into(),
            version: 3,
        },
        title: "draft".into(),
    };
    let mut row = DocumentRow::default();
    copy(&mut row, &doc).unwrap();

    // `version` prefers the shallow field of the row.
    assert_eq!(row.version, 3);
    assert_eq!(row.title, "draft");
    assert_eq!(row.audit.as_ref().unwrap().created_by, "ann");
    assert_eq!(row.audit.as_ref().unwrap().version, 0);

    let mut back = Document::default();
    copy(&mut back, &row).unwrap();
    assert_eq!(back.audit.created_by, "ann");
    assert_eq!(back.audit.version, 3);
}

// -----------------------------------------------------------------------------
// Methods

#[derive(Reflect, Clone, Default, Debug)]
#[reflect(getter = full_name, getter = double_age as "DoubleAge")]
struct Member {
    first: String,
    last: String,
    age: i32,
    role: String,
}

impl Member {
    fn full_name(&self) -> String {
        alloc::format!("{} {}", self.first, self.last)
    }

    fn double_age(&self) -> i32 {
        self.age * 2
    }
}

#[derive(Reflect, Clone, Default, Debug)]
#[reflect(setter = assign_role as "Role")]
struct Account {
    full_name: String,
    double_age: i64,
    age: i32,
    roles: Vec<String>,
}

impl Account {
    fn assign_role(&mut self, role: String) {
        self.roles.push(role);
    }
}

#[test]
fn getters_and_setters() {
    let member = Member {
        first: "Ada".into(),
        last: "King".into(),
        age: 36,
        role: "admin".into(),
    };
    let mut account = Account::default();
    copy(&mut account, &member).unwrap();

    assert_eq!(account.full_name, "Ada King");
    assert_eq!(account.double_age, 72);
    assert_eq!(account.age, 36);
    assert_eq!(account.roles, ["admin"]);
}

// -----------------------------------------------------------------------------
// Scanner and Valuer

#[derive(Reflect, Clone, Default, Debug, PartialEq)]
#[reflect(opaque, scanner, valuer)]
struct NullString {
    value: String,
    valid: bool,
}

impl Scanner for NullString {
    fn scan(&mut self, src: &dyn Reflect) -> Result<(), BridgeError> {
        match src.downcast_ref::<String>() {
            Some(value) => {
                self.value = value.clone();
                self.valid = true;
                Ok(())
            }
            None => Err(BridgeError::new("NullString only scans strings")),
        }
    }
}

impl Valuer for NullString {
    fn value(&self) -> Result<Option<Box<dyn Reflect>>, BridgeError> {
        Ok(self
            .valid
            .then(|| Box::new(self.value.clone()) as Box<dyn Reflect>))
    }
}

#[derive(Reflect, Clone, Default, Debug)]
struct Plain {
    name: String,
    nick: Option<String>,
}

#[derive(Reflect, Clone, Default, Debug)]
struct Nullable {
    name: NullString,
    nick: NullString,
}

#[derive(Reflect, Clone, Default, Debug)]
struct BadNullable {
    name: NullString,
    nick: i32,
}

#[derive(Reflect, Clone, Default, Debug)]
struct Numbered {
    name: i32,
}

#[test]
fn scanner_reads_plain_values() {
    let mut nullable = Nullable::default();
    let plain = Plain {
        name: "ann".into(),
        nick: None,
    };
    copy(&mut nullable, &plain).unwrap();

    assert_eq!(nullable.name, NullString { value: "ann".into(), valid: true });
    assert!(!nullable.nick.valid);

    let err = copy(&mut BadNullable::default(), &Numbered { name: 1 }).unwrap_err();
    assert!(matches!(err, CopyError::Scanner(_)));
}

#[test]
fn valuer_writes_plain_values() {
    let nullable = Nullable {
        name: NullString {
            value: "ann".into(),
            valid: true,
        },
        nick: NullString::default(),
    };
    let mut plain = Plain {
        name: String::new(),
        nick: None,
    };
    copy(&mut plain, &nullable).unwrap();

    assert_eq!(plain.name, "ann");
    assert_eq!(plain.nick, None);
}

// -----------------------------------------------------------------------------
// Dynamic slots

#[derive(Reflect, Clone, Default, Debug)]
struct Envelope {
    payload: Dynamic,
}

#[test]
fn dynamic_destinations() {
    let mut slot = Dynamic::default();
    copy(&mut slot, &Person { name: "Ann".into(), age: 30 }).unwrap();
    assert_eq!(slot.get().unwrap().downcast_ref::<Person>().unwrap().name, "Ann");

    let mut slot = Dynamic::new(0_i64);
    copy(&mut slot, &7_u8).unwrap();
    assert_eq!(slot.get().unwrap().downcast_ref::<i64>(), Some(&7));

    let src = Envelope {
        payload: Dynamic::new(String::from("x")),
    };
    let mut dst = Envelope::default();
    copy_with_options(&mut dst, &src, CopyOptions::new().with_deep_copy(true)).unwrap();
    assert_eq!(dst.payload.get().unwrap().downcast_ref::<String>().unwrap(), "x");
}

// -----------------------------------------------------------------------------
// Extension points

struct CentsToPrice;

impl TypedCopier for CentsToPrice {
    fn pairs(&self) -> Vec<TypePair> {
        Vec::from([TypePair::of::<i64, String>()])
    }

    fn copy(&self, dst: &mut dyn Reflect, src: &dyn Reflect) -> Result<(), BoxedError> {
        let cents = src.downcast_ref::<i64>().ok_or("expected i64")?;
        if *cents < 0 {
            return Err("negative price".into());
        }
        let price = dst.downcast_mut::<String>().ok_or("expected String")?;
        *price = alloc::format!("{}.{:02}", cents / 100, cents % 100);
        Ok(())
    }
}

#[derive(Reflect, Clone, Default, Debug)]
struct Item {
    price: i64,
}

#[derive(Reflect, Clone, Default, Debug)]
struct ItemView {
    price: String,
}

#[test]
fn registered_converters() {
    let mut registry = ConverterRegistry::new();
    registry.register(CentsToPrice);
    let copier = Copier::new().with_registry(&registry);

    let mut view = ItemView::default();
    copier.copy(&mut view, &Item { price: 1234 }).unwrap();
    assert_eq!(view.price, "12.34");

    let err = copier.copy(&mut view, &Item { price: -1 }).unwrap_err();
    assert!(matches!(err, CopyError::Converter { .. }));

    // Without a converter the pair has no conversion path.
    let mut view = ItemView::default();
    copy(&mut view, &Item { price: 1234 }).unwrap();
    assert_eq!(view.price, "");
}

#[test]
fn hooks_veto_fields() {
    let seen = Cell::new(0);
    let copier = Copier::new().with_hook(|value, field| {
        seen.set(seen.get() + 1);
        !(field.name() == "age" && value.is_zero())
    });

    let mut payroll = Payroll {
        age: 50,
        ..Default::default()
    };
    copier
        .copy(&mut payroll, &Person { name: "Ann".into(), age: 0 })
        .unwrap();

    assert_eq!(seen.get(), 2);
    assert_eq!(payroll.name, "Ann");
    assert_eq!(payroll.age, 50);
}

#[test]
fn parsers_take_over_fields() {
    let copier = Copier::new()
        .with_parser(|dst, src| match (dst.downcast_mut::<String>(), src.downcast_ref::<String>()) {
            (Some(dst), Some(src)) => {
                *dst = src.to_uppercase();
                Ok(true)
            }
            _ => Ok(false),
        })
        .with_parser(|_, src| match src.downcast_ref::<i32>() {
            Some(age) if *age < 0 => Err(CopyError::Parser(alloc::format!("negative age {age}"))),
            _ => Ok(false),
        });

    let mut payroll = Payroll::default();
    copier
        .copy(&mut payroll, &Person { name: "ann".into(), age: 30 })
        .unwrap();
    assert_eq!(payroll.name, "ANN");
    assert_eq!(payroll.age, 30);

    let err = copier
        .copy(&mut payroll, &Person { name: "ann".into(), age: -1 })
        .unwrap_err();
    assert!(matches!(err, CopyError::Parser(_)));
}
