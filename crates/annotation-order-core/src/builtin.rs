//! Builtin annotation conventions.
//!
//! Names are grouped by the library that defines them. Within a group,
//! names on one line are mutually exclusive alternatives in practice and
//! keep their listed relative order.

use crate::model::OrderingKind;

/// Classes and enums.
#[rustfmt::skip]
pub const CLASS_ORDER: &[&str] = &[
    // Java
    "Deprecated",
    // Spring
    "Profile",
    "SpringBootApplication",
    "Controller", "RestController", "ControllerAdvice", "Service", "Component", "Configuration",
    "Aspect", "Converter",
    // JPA
    "Entity", "Embeddable",
    "Table",
    "IdClass",
    "BatchSize",
    "EntityListeners",
    "Audited",
    "AuditTable",
    // Test
    "Disabled",
    "ActiveProfiles",
    "ExtendWith",
    "SpringBootTest",
    "TestConfiguration",
    "Transactional",
    // Jackson
    "JsonSerialize",
    "JsonFormat",
    // Lombok
    "NoArgsConstructor", "AllArgsConstructor", "RequiredArgsConstructor",
    "Builder",
    "Getter", "Setter", "Data",
    "EqualsAndHashCode",
    "ToString",
    "Slf4j",
    // Checkstyle
    "StatelessCheck",
];

/// Interfaces.
#[rustfmt::skip]
pub const INTERFACE_ORDER: &[&str] = &[
    // Spring
    "Repository",
    "FeignClient",
    // Lombok
    "Slf4j",
];

/// Methods and constructors.
#[rustfmt::skip]
pub const METHOD_ORDER: &[&str] = &[
    // Java
    "Override",
    "Deprecated",
    "SuppressWarnings",
    // Spring
    "PreAuthorize",
    "GetMapping", "PostMapping", "PutMapping", "PatchMapping", "DeleteMapping",
    "ExceptionHandler",
    "ResponseStatus", "ResponseBody",
    "Around",
    "Async",
    "Cacheable",
    "Primary",
    "Bean",
    "ConfigurationProperties",
    // Validation
    "AssertTrue",
    // JUnit
    "Disabled",
    "WithMockUser", "WithUserDetails",
    "BeforeAll", "BeforeEach", "AfterAll", "AfterEach",
    "Test",
    // Scheduling
    "Scheduled",
    "SchedulerLock",
    // JPA
    "Transactional",
    "Modifying",
    "Query",
    "EntityGraph",
    // Jackson
    "JsonCreator",
    "JsonIgnore",
    // springdoc
    "Operation",
];

/// Fields.
#[rustfmt::skip]
pub const FIELD_ORDER: &[&str] = &[
    // Java
    "Deprecated",
    "SuppressWarnings",
    // Spring
    "Value",
    "Qualifier",
    // Validation
    "NotNull", "NotBlank", "NotEmpty",
    "Size",
    "Min", "Max",
    "Email",
    // Test
    "LocalServerPort",
    "Spy",
    "InjectMocks",
    "Mock",
    // JPA
    "Embedded",
    "Id",
    "GeneratedValue",
    "Fetch",
    "OneToOne", "OneToMany", "ManyToOne",
    "CreatedDate", "CreatedBy", "LastModifiedDate", "LastModifiedBy",
    "Enumerated",
    "Convert",
    "Column", "JoinColumn",
    "Formula",
    "BatchSize",
    "Where",
    "OrderBy",
    // Jackson
    "JsonProperty",
    "JsonFormat",
    "JsonIgnore",
    // springdoc
    "Schema",
    // Lombok
    "Setter",
];

/// Method and constructor parameters.
#[rustfmt::skip]
pub const PARAMETER_ORDER: &[&str] = &[
    // Validation
    "Valid",
    "NotNull",
    // Spring
    "PathVariable", "RequestParam", "RequestBody", "RequestPart", "ModelAttribute", "CookieValue",
    "PageableDefault", "SortDefault",
    "Qualifier",
    // JPA
    "Param",
    // Jackson
    "JsonProperty",
    // springdoc
    "ParameterObject", "AuthenticationPrincipal",
];

/// Unranked names with these prefixes are not reported on classes.
// TODO: rank the Spring `Enable*` family (EnableCaching, EnableScheduling, ...) and drop this.
pub const CLASS_EXEMPT_PREFIXES: &[&str] = &["Enable"];

/// Returns the builtin order for a catalog key.
#[must_use]
pub fn order(kind: OrderingKind) -> &'static [&'static str] {
    match kind {
        OrderingKind::Class => CLASS_ORDER,
        OrderingKind::Interface => INTERFACE_ORDER,
        OrderingKind::MethodOrConstructor => METHOD_ORDER,
        OrderingKind::Field => FIELD_ORDER,
        OrderingKind::Parameter => PARAMETER_ORDER,
    }
}

/// Returns the builtin exempt prefixes for a catalog key.
#[must_use]
pub fn exempt_prefixes(kind: OrderingKind) -> &'static [&'static str] {
    match kind {
        OrderingKind::Class => CLASS_EXEMPT_PREFIXES,
        _ => &[],
    }
}
