pub mod address;
pub mod country;
pub mod educational_level;
pub mod field_of_study;
pub mod platform;
pub mod platform_profile;
pub mod refresh_token;
pub mod scholarship;
pub mod scholarship_country;
pub mod scholarship_field;
pub mod scholarship_level;
pub mod school;
pub mod school_address;
pub mod school_educational_level;
pub mod school_school_type;
pub mod school_type;
pub mod user;

pub use address::{Entity as Address, Model as AddressModel};
pub use country::{Entity as Country, Model as CountryModel};
pub use educational_level::{Entity as EducationalLevel, Model as EducationalLevelModel};
pub use field_of_study::{Entity as FieldOfStudy, Model as FieldOfStudyModel};
pub use platform::{Entity as Platform, Model as PlatformModel};
pub use platform_profile::{Entity as PlatformProfile, Model as PlatformProfileModel};
#[allow(unused_imports)]
pub use refresh_token::Entity as RefreshToken;
pub use scholarship::{ApplicationStatus, Entity as Scholarship, Model as ScholarshipModel};
pub use scholarship_country::Entity as ScholarshipCountry;
pub use scholarship_field::Entity as ScholarshipField;
pub use scholarship_level::Entity as ScholarshipLevel;
pub use school::{Entity as School, Model as SchoolModel};
pub use school_address::Entity as SchoolAddress;
pub use school_educational_level::Entity as SchoolEducationalLevel;
pub use school_school_type::Entity as SchoolSchoolType;
pub use school_type::{Entity as SchoolType, Model as SchoolTypeModel};
pub use user::{Entity as User, Model as UserModel};
