//! Declaration attributes: origins, visibility, modality, class kinds

/// Why a declaration exists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclarationOrigin {
    Defined,
    FakeOverride,
    ForLoopIterator,
    ForLoopVariable,
    ForLoopImplicitVariable,
    PropertyBackingField,
    DefaultPropertyAccessor,
    Delegate,
    DelegatedPropertyAccessor,
    DelegatedMember,
    EnumClassSpecialMember,
    FunctionForDefaultParameter,
    FileClass,
    GeneratedDataClassMember,
    GeneratedInlineClassMember,
    LocalFunctionForLambda,
    CatchParameter,
    InstanceReceiver,
    PrimaryConstructorParameter,
    IrTemporaryVariable,
    IrExternalDeclarationStub,
    IrBuiltinsStub,
    Bridge,
    FieldForEnumEntry,
    FieldForEnumValues,
    FieldForObjectInstance,
}

impl DeclarationOrigin {
    const ALL: [DeclarationOrigin; 26] = [
        DeclarationOrigin::Defined,
        DeclarationOrigin::FakeOverride,
        DeclarationOrigin::ForLoopIterator,
        DeclarationOrigin::ForLoopVariable,
        DeclarationOrigin::ForLoopImplicitVariable,
        DeclarationOrigin::PropertyBackingField,
        DeclarationOrigin::DefaultPropertyAccessor,
        DeclarationOrigin::Delegate,
        DeclarationOrigin::DelegatedPropertyAccessor,
        DeclarationOrigin::DelegatedMember,
        DeclarationOrigin::EnumClassSpecialMember,
        DeclarationOrigin::FunctionForDefaultParameter,
        DeclarationOrigin::FileClass,
        DeclarationOrigin::GeneratedDataClassMember,
        DeclarationOrigin::GeneratedInlineClassMember,
        DeclarationOrigin::LocalFunctionForLambda,
        DeclarationOrigin::CatchParameter,
        DeclarationOrigin::InstanceReceiver,
        DeclarationOrigin::PrimaryConstructorParameter,
        DeclarationOrigin::IrTemporaryVariable,
        DeclarationOrigin::IrExternalDeclarationStub,
        DeclarationOrigin::IrBuiltinsStub,
        DeclarationOrigin::Bridge,
        DeclarationOrigin::FieldForEnumEntry,
        DeclarationOrigin::FieldForEnumValues,
        DeclarationOrigin::FieldForObjectInstance,
    ];

    /// Wire name of the origin
    pub fn name(self) -> &'static str {
        match self {
            DeclarationOrigin::Defined => "DEFINED",
            DeclarationOrigin::FakeOverride => "FAKE_OVERRIDE",
            DeclarationOrigin::ForLoopIterator => "FOR_LOOP_ITERATOR",
            DeclarationOrigin::ForLoopVariable => "FOR_LOOP_VARIABLE",
            DeclarationOrigin::ForLoopImplicitVariable => "FOR_LOOP_IMPLICIT_VARIABLE",
            DeclarationOrigin::PropertyBackingField => "PROPERTY_BACKING_FIELD",
            DeclarationOrigin::DefaultPropertyAccessor => "DEFAULT_PROPERTY_ACCESSOR",
            DeclarationOrigin::Delegate => "DELEGATE",
            DeclarationOrigin::DelegatedPropertyAccessor => "DELEGATED_PROPERTY_ACCESSOR",
            DeclarationOrigin::DelegatedMember => "DELEGATED_MEMBER",
            DeclarationOrigin::EnumClassSpecialMember => "ENUM_CLASS_SPECIAL_MEMBER",
            DeclarationOrigin::FunctionForDefaultParameter => "FUNCTION_FOR_DEFAULT_PARAMETER",
            DeclarationOrigin::FileClass => "FILE_CLASS",
            DeclarationOrigin::GeneratedDataClassMember => "GENERATED_DATA_CLASS_MEMBER",
            DeclarationOrigin::GeneratedInlineClassMember => "GENERATED_INLINE_CLASS_MEMBER",
            DeclarationOrigin::LocalFunctionForLambda => "LOCAL_FUNCTION_FOR_LAMBDA",
            DeclarationOrigin::CatchParameter => "CATCH_PARAMETER",
            DeclarationOrigin::InstanceReceiver => "INSTANCE_RECEIVER",
            DeclarationOrigin::PrimaryConstructorParameter => "PRIMARY_CONSTRUCTOR_PARAMETER",
            DeclarationOrigin::IrTemporaryVariable => "IR_TEMPORARY_VARIABLE",
            DeclarationOrigin::IrExternalDeclarationStub => "IR_EXTERNAL_DECLARATION_STUB",
            DeclarationOrigin::IrBuiltinsStub => "IR_BUILTINS_STUB",
            DeclarationOrigin::Bridge => "BRIDGE",
            DeclarationOrigin::FieldForEnumEntry => "FIELD_FOR_ENUM_ENTRY",
            DeclarationOrigin::FieldForEnumValues => "FIELD_FOR_ENUM_VALUES",
            DeclarationOrigin::FieldForObjectInstance => "FIELD_FOR_OBJECT_INSTANCE",
        }
    }

    /// Look an origin up by its wire name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|origin| origin.name() == name)
    }
}

impl std::fmt::Display for DeclarationOrigin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Declaration visibility
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Visibility {
    #[default]
    Public,
    Protected,
    Internal,
    Private,
    PrivateToThis,
    Local,
    InvisibleFake,
    Unknown,
}

impl Visibility {
    /// Decode a visibility name. Unrecognized names fall back to the default.
    pub fn from_name(name: &str) -> Self {
        match name {
            "public" => Visibility::Public,
            "protected" => Visibility::Protected,
            "internal" => Visibility::Internal,
            "private" => Visibility::Private,
            "private_to_this" => Visibility::PrivateToThis,
            "local" => Visibility::Local,
            "invisible_fake" => Visibility::InvisibleFake,
            "unknown" => Visibility::Unknown,
            _ => Visibility::default(),
        }
    }
}

/// Inheritance modality
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Modality {
    #[default]
    Final,
    Sealed,
    Open,
    Abstract,
}

/// Class flavours
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ClassKind {
    #[default]
    Class,
    Interface,
    EnumClass,
    EnumEntry,
    AnnotationClass,
    Object,
}
