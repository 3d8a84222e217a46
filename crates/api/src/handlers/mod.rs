pub mod org_profile;
