//! Classes shared by the integration tests.
#![allow(dead_code)]

use autowire::prelude::*;

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

/// A catalog holding every fixture class.
pub fn catalog() -> Arc<ClassCatalog> {
    let catalog = ClassCatalog::new();
    catalog
        .add::<Foo>()
        .add::<Bar>()
        .add::<TestClass>()
        .add::<OtherTestClass>()
        .add::<TestClass2>()
        .add::<TestClass3>()
        .add::<TestClass4>()
        .add::<TestClass5>()
        .add::<TestClass6>()
        .add::<Pair>()
        .add::<Chicken>()
        .add::<Egg>()
        .add::<Broken>()
        .add::<NeedsBroken>();
    Arc::new(catalog)
}

pub fn container() -> Container {
    init_tracing();
    Container::with_catalog(catalog())
}

pub trait TestInterface: Send + Sync {
    fn label(&self) -> &'static str;
}

#[derive(Debug)]
pub struct Foo;

impl Class for Foo {
    const NAME: &'static str = "Foo";

    fn construct(_args: &Arguments) -> std::result::Result<Self, ReflectionError> {
        Ok(Foo)
    }
}

pub struct Bar {
    pub foo: Arc<Foo>,
}

impl Class for Bar {
    const NAME: &'static str = "Bar";

    fn signature() -> Signature {
        Signature::new(vec![Parameter::typed("foo", "Foo")])
    }

    fn construct(args: &Arguments) -> std::result::Result<Self, ReflectionError> {
        Ok(Bar {
            foo: args.object(0)?,
        })
    }
}

pub struct TestClass;

impl TestInterface for TestClass {
    fn label(&self) -> &'static str {
        "TestClass"
    }
}

impl Class for TestClass {
    const NAME: &'static str = "TestClass";

    fn interfaces(interfaces: &mut Interfaces<Self>) {
        interfaces.bind::<dyn TestInterface, _>("TestInterface", |c| c as Arc<dyn TestInterface>);
    }

    fn construct(_args: &Arguments) -> std::result::Result<Self, ReflectionError> {
        Ok(TestClass)
    }
}

pub struct OtherTestClass;

impl TestInterface for OtherTestClass {
    fn label(&self) -> &'static str {
        "OtherTestClass"
    }
}

impl Class for OtherTestClass {
    const NAME: &'static str = "OtherTestClass";

    fn interfaces(interfaces: &mut Interfaces<Self>) {
        interfaces.bind::<dyn TestInterface, _>("TestInterface", |c| c as Arc<dyn TestInterface>);
    }

    fn construct(_args: &Arguments) -> std::result::Result<Self, ReflectionError> {
        Ok(OtherTestClass)
    }
}

pub struct TestClass2 {
    pub test: Arc<dyn TestInterface>,
}

impl Class for TestClass2 {
    const NAME: &'static str = "TestClass2";

    fn signature() -> Signature {
        Signature::new(vec![Parameter::typed("test", "TestInterface")])
    }

    fn construct(args: &Arguments) -> std::result::Result<Self, ReflectionError> {
        Ok(TestClass2 {
            test: args.interface::<dyn TestInterface>(0)?,
        })
    }
}

/// `foo: Foo, bar: ?Bar = null`
pub struct TestClass3 {
    pub foo: Arc<Foo>,
    pub bar: Option<Arc<Bar>>,
}

impl Class for TestClass3 {
    const NAME: &'static str = "TestClass3";

    fn signature() -> Signature {
        Signature::new(vec![
            Parameter::typed("foo", "Foo"),
            Parameter::typed("bar", "Bar").optional(),
        ])
    }

    fn construct(args: &Arguments) -> std::result::Result<Self, ReflectionError> {
        Ok(TestClass3 {
            foo: args.object(0)?,
            bar: args.optional_object(1)?,
        })
    }
}

pub struct TestClass4 {
    pub foo: String,
}

impl Class for TestClass4 {
    const NAME: &'static str = "TestClass4";

    fn signature() -> Signature {
        Signature::new(vec![Parameter::typed("foo", "string")])
    }

    fn construct(args: &Arguments) -> std::result::Result<Self, ReflectionError> {
        Ok(TestClass4 {
            foo: args.string(0)?,
        })
    }
}

pub struct TestClass5 {
    pub foo: bool,
}

impl Class for TestClass5 {
    const NAME: &'static str = "TestClass5";

    fn signature() -> Signature {
        Signature::new(vec![Parameter::typed("foo", "bool")])
    }

    fn construct(args: &Arguments) -> std::result::Result<Self, ReflectionError> {
        Ok(TestClass5 {
            foo: args.bool(0)?,
        })
    }
}

pub struct TestClass6 {
    pub foo: i64,
}

impl Class for TestClass6 {
    const NAME: &'static str = "TestClass6";

    fn signature() -> Signature {
        Signature::new(vec![Parameter::typed("foo", "int")])
    }

    fn construct(args: &Arguments) -> std::result::Result<Self, ReflectionError> {
        Ok(TestClass6 {
            foo: args.int(0)?,
        })
    }
}

/// `foo: Foo, bar: Bar`, both required.
pub struct Pair {
    pub foo: Arc<Foo>,
    pub bar: Arc<Bar>,
}

impl Class for Pair {
    const NAME: &'static str = "Pair";

    fn signature() -> Signature {
        Signature::new(vec![
            Parameter::typed("foo", "Foo"),
            Parameter::typed("bar", "Bar"),
        ])
    }

    fn construct(args: &Arguments) -> std::result::Result<Self, ReflectionError> {
        Ok(Pair {
            foo: args.object(0)?,
            bar: args.object(1)?,
        })
    }
}

/// `Chicken(egg: Egg)` and `Egg(chicken: Chicken)`.
pub struct Chicken;

impl Class for Chicken {
    const NAME: &'static str = "Chicken";

    fn signature() -> Signature {
        Signature::new(vec![Parameter::typed("egg", "Egg")])
    }

    fn construct(args: &Arguments) -> std::result::Result<Self, ReflectionError> {
        args.object::<Egg>(0)?;
        Ok(Chicken)
    }
}

pub struct Egg;

impl Class for Egg {
    const NAME: &'static str = "Egg";

    fn signature() -> Signature {
        Signature::new(vec![Parameter::typed("chicken", "Chicken")])
    }

    fn construct(args: &Arguments) -> std::result::Result<Self, ReflectionError> {
        args.object::<Chicken>(0)?;
        Ok(Egg)
    }
}

/// Always fails to construct.
pub struct Broken;

impl Class for Broken {
    const NAME: &'static str = "Broken";

    fn construct(_args: &Arguments) -> std::result::Result<Self, ReflectionError> {
        Err(ReflectionError::construction(Self::NAME, "out of order"))
    }
}

/// `foo: Foo, broken: Broken`
pub struct NeedsBroken;

impl Class for NeedsBroken {
    const NAME: &'static str = "NeedsBroken";

    fn signature() -> Signature {
        Signature::new(vec![
            Parameter::typed("foo", "Foo"),
            Parameter::typed("broken", "Broken"),
        ])
    }

    fn construct(args: &Arguments) -> std::result::Result<Self, ReflectionError> {
        args.object::<Foo>(0)?;
        args.object::<Broken>(1)?;
        Ok(NeedsBroken)
    }
}
