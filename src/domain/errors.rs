use custom_error::custom_error;

custom_error! {
///! Custom error for a document path pattern that cannot be used as a trigger.
pub MalformedPattern
    EmptySegment{pattern:String} = "Empty segment in document pattern: `{pattern}`",
    InvalidWildcard{segment:String} = "Invalid wildcard segment: `{segment}`",
    DuplicateWildcard{name:String} = "Wildcard `{name}` appears more than once",
}
