use crate::catalog::Catalog;
use crate::person::{Gender, Industry, Person};
use crate::predicate::Attribute;

/// A builder for filtering people in a catalog by simple criteria.
///
/// All criteria must match. Results keep catalog (id) order.
#[derive(Clone)]
pub struct QueryBuilder<'c> {
    catalog: &'c Catalog,
    gender: Option<Gender>,
    industry: Option<Industry>,
    occupation_contains: Option<String>,
    nationality: Option<String>,
    age_min: Option<u32>,
    age_max: Option<u32>,
    attribute: Option<Attribute>,
    limit: Option<usize>,
    offset: usize,
}

impl<'c> QueryBuilder<'c> {
    /// Start an unfiltered query over `catalog`.
    pub fn new(catalog: &'c Catalog) -> Self {
        Self {
            catalog,
            gender: None,
            industry: None,
            occupation_contains: None,
            nationality: None,
            age_min: None,
            age_max: None,
            attribute: None,
            limit: None,
            offset: 0,
        }
    }

    /// Filter by gender.
    pub fn gender(mut self, gender: Gender) -> Self {
        self.gender = Some(gender);
        self
    }

    /// Filter by industry.
    pub fn industry(mut self, industry: Industry) -> Self {
        self.industry = Some(industry);
        self
    }

    /// Filter to occupations containing the given substring (case-insensitive).
    pub fn occupation_contains(mut self, s: impl Into<String>) -> Self {
        self.occupation_contains = Some(s.into().to_lowercase());
        self
    }

    /// Filter by nationality (case-insensitive).
    pub fn nationality(mut self, s: impl Into<String>) -> Self {
        self.nationality = Some(s.into().to_lowercase());
        self
    }

    /// Keep people at least this old.
    pub fn age_min(mut self, age: u32) -> Self {
        self.age_min = Some(age);
        self
    }

    /// Keep people at most this old.
    pub fn age_max(mut self, age: u32) -> Self {
        self.age_max = Some(age);
        self
    }

    /// Keep people the attribute holds for.
    pub fn attribute(mut self, attribute: Attribute) -> Self {
        self.attribute = Some(attribute);
        self
    }

    /// Limit the number of results.
    pub fn limit(mut self, n: usize) -> Self {
        self.limit = Some(n);
        self
    }

    /// Skip the first N results.
    pub fn offset(mut self, n: usize) -> Self {
        self.offset = n;
        self
    }

    /// Execute the query and return matching people.
    pub fn execute(self) -> Vec<&'c Person> {
        let matching = self
            .catalog
            .iter()
            .filter(|p| self.matches(p))
            .skip(self.offset);
        match self.limit {
            Some(limit) => matching.take(limit).collect(),
            None => matching.collect(),
        }
    }

    /// Count matching people without collecting them. Ignores limit and offset.
    pub fn count(self) -> usize {
        self.catalog.iter().filter(|p| self.matches(p)).count()
    }

    fn matches(&self, person: &Person) -> bool {
        if let Some(gender) = self.gender
            && person.gender() != gender
        {
            return false;
        }

        if let Some(industry) = self.industry
            && person.industry() != industry
        {
            return false;
        }

        if let Some(ref s) = self.occupation_contains
            && !person.occupation().to_lowercase().contains(s)
        {
            return false;
        }

        if let Some(ref s) = self.nationality
            && person.nationality().to_lowercase() != *s
        {
            return false;
        }

        if self.age_min.is_some_and(|min| person.age() < min) {
            return false;
        }

        if self.age_max.is_some_and(|max| person.age() > max) {
            return false;
        }

        self.attribute.is_none_or(|a| a.holds(person))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        let mut c = Catalog::new();
        c.insert_many([
            Person::new(1, "Roger Federer", "M", 42, "Tennis", "SPORTS", "Switzerland").unwrap(),
            Person::new(2, "Serena Williams", "F", 41, "Tennis", "SPORTS", "USA").unwrap(),
            Person::new(3, "Taylor Swift", "F", 34, "Singer", "MUSIC", "USA").unwrap(),
            Person::new(4, "Marie Curie", "F", 66, "Chemist", "SCIENCE", "Poland").unwrap(),
        ]);
        c
    }

    fn names(people: Vec<&Person>) -> Vec<&str> {
        people.into_iter().map(|p| p.name()).collect()
    }

    #[test]
    fn unfiltered_returns_all_in_order() {
        let c = catalog();
        assert_eq!(c.query().count(), 4);
        assert_eq!(names(c.query().execute())[0], "Roger Federer");
    }

    #[test]
    fn query_by_gender_and_industry() {
        let c = catalog();
        let results = c
            .query()
            .gender(Gender::Female)
            .industry(Industry::Sports)
            .execute();
        assert_eq!(names(results), ["Serena Williams"]);
    }

    #[test]
    fn query_by_occupation_substring() {
        let c = catalog();
        assert_eq!(c.query().occupation_contains("TENN").count(), 2);
    }

    #[test]
    fn query_by_nationality_ignores_case() {
        let c = catalog();
        assert_eq!(
            names(c.query().nationality("usa").execute()),
            ["Serena Williams", "Taylor Swift"]
        );
    }

    #[test]
    fn query_by_age_range() {
        let c = catalog();
        let results = c.query().age_min(40).age_max(50).execute();
        assert_eq!(names(results), ["Roger Federer", "Serena Williams"]);
    }

    #[test]
    fn limit_and_offset() {
        let c = catalog();
        assert_eq!(c.query().limit(2).execute().len(), 2);
        assert_eq!(
            names(c.query().offset(1).limit(1).execute()),
            ["Serena Williams"]
        );
    }

    #[test]
    fn query_by_attribute() {
        let c = catalog();
        assert_eq!(
            names(c.query().attribute(Attribute::Tennis).execute()),
            ["Roger Federer", "Serena Williams"]
        );
    }

    #[test]
    fn count_ignores_paging() {
        let c = catalog();
        let query = c.query().gender(Gender::Female).offset(1).limit(1);
        assert_eq!(names(query.clone().execute()), ["Taylor Swift"]);
        assert_eq!(query.count(), 3);
    }
}
