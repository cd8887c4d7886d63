// Copyright (C) 2009 The Libphonenumber Authors
// Copyright (C) 2025 Kashin Vladislav (Rust adaptation author)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::collections::{BTreeSet, HashMap, hash_map::Entry};

use log::{debug, trace, warn};

use crate::{i18n, metadata::Territory};

use super::errors::DuplicateRegionError;

/// Read-only lookup of territories by region code and by calling code.
#[derive(Debug)]
pub struct TerritoryIndex {
    /// Territories in the order they were supplied.
    territories: Vec<Territory>,

    /// A mapping from a region code to the position of its territory.
    region_to_territory: HashMap<String, usize>,

    /// A mapping from a country calling code to the territories sharing it.
    /// Note regions under NANPA share the country calling code 1 and Russia
    /// and Kazakhstan share the country calling code 7. The main territory
    /// for a code comes first, the others keep their metadata order. This is
    /// implemented as a sorted vector to achieve better performance.
    country_calling_code_to_territories: Vec<(u32, Vec<usize>)>,
}

impl TerritoryIndex {
    pub fn new<I>(territories: I) -> Result<Self, DuplicateRegionError>
    where
        I: IntoIterator<Item = Territory>,
    {
        let territories: Vec<Territory> = territories.into_iter().collect();
        let mut region_to_territory = HashMap::with_capacity(territories.len());
        // Storing data in a temporary map to make it easier to find other
        // regions that share a country calling code when inserting data.
        let mut calling_code_map = HashMap::<u32, Vec<usize>>::new();

        for (position, territory) in territories.iter().enumerate() {
            match region_to_territory.entry(territory.region_code.clone()) {
                Entry::Occupied(_) => {
                    return Err(DuplicateRegionError(territory.region_code.clone()));
                }
                Entry::Vacant(slot) => {
                    slot.insert(position);
                }
            }
            calling_code_map
                .entry(territory.country_code)
                .or_default()
                .push(position);
        }

        let mut country_calling_code_to_territories: Vec<(u32, Vec<usize>)> = calling_code_map
            .into_iter()
            .map(|(code, mut positions)| {
                // Stable: ties keep metadata order.
                positions.sort_by_key(|&position| !territories[position].main_country_for_code);
                let mains = positions
                    .iter()
                    .filter(|&&position| territories[position].main_country_for_code)
                    .count();
                if positions.len() > 1 && mains != 1 {
                    warn!(
                        "Calling code {} is shared by {} territories with {} marked as main",
                        code,
                        positions.len(),
                        mains
                    );
                }
                (code, positions)
            })
            .collect();
        // Sort all the pairs in ascending order according to country calling code.
        country_calling_code_to_territories.sort_by_key(|(code, _)| *code);

        debug!(
            "Indexed {} territories under {} calling codes",
            territories.len(),
            country_calling_code_to_territories.len()
        );
        Ok(Self {
            territories,
            region_to_territory,
            country_calling_code_to_territories,
        })
    }

    pub fn by_region(&self, region_code: &str) -> Option<&Territory> {
        let territory = self
            .region_to_territory
            .get(region_code)
            .map(|&position| &self.territories[position]);
        if territory.is_none() {
            trace!("No territory for region code {}", region_code);
        }
        territory
    }

    /// Territories sharing the calling code, the main one first.
    pub fn by_calling_code(&self, country_calling_code: u32) -> Vec<&Territory> {
        self.positions_for_code(country_calling_code)
            .iter()
            .map(|&position| &self.territories[position])
            .collect()
    }

    pub fn main_territory_for_code(&self, country_calling_code: u32) -> Option<&Territory> {
        self.positions_for_code(country_calling_code)
            .first()
            .map(|&position| &self.territories[position])
    }

    pub fn regions_sharing_calling_code(&self, country_calling_code: u32) -> BTreeSet<&str> {
        self.positions_for_code(country_calling_code)
            .iter()
            .map(|&position| self.territories[position].region_code.as_str())
            .collect()
    }

    /// Returns the region code that matches the specific country calling code. In
    /// the case of no region code being found, the unknown region code will be
    /// returned.
    pub fn region_code_for_country_code(&self, country_calling_code: u32) -> &str {
        self.main_territory_for_code(country_calling_code)
            .map(|territory| territory.region_code.as_str())
            .unwrap_or(i18n::RegionCode::get_unknown())
    }

    pub fn has_calling_code(&self, country_calling_code: u32) -> bool {
        !self.positions_for_code(country_calling_code).is_empty()
    }

    pub fn supported_regions(&self) -> impl Iterator<Item = &str> {
        self.territories
            .iter()
            .map(|territory| territory.region_code.as_str())
    }

    pub fn supported_calling_codes(&self) -> impl Iterator<Item = u32> {
        self.country_calling_code_to_territories
            .iter()
            .map(|(code, _)| *code)
    }

    pub fn territories(&self) -> &[Territory] {
        &self.territories
    }

    fn positions_for_code(&self, country_calling_code: u32) -> &[usize] {
        self.country_calling_code_to_territories
            .binary_search_by_key(&country_calling_code, |(code, _)| *code)
            .map(|index| self.country_calling_code_to_territories[index].1.as_slice())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::TerritoryIndex;
    use crate::{metadata::Territory, phonenumberutil::errors::DuplicateRegionError};

    fn territory(region: &str, code: u32, main: bool) -> Territory {
        Territory {
            main_country_for_code: main,
            ..Territory::new(region, code)
        }
    }

    fn regions<'a>(territories: Vec<&'a Territory>) -> Vec<&'a str> {
        territories
            .into_iter()
            .map(|territory| territory.region_code.as_str())
            .collect()
    }

    #[test]
    fn main_territory_comes_first_then_metadata_order() {
        let index = TerritoryIndex::new([
            territory("BS", 1, false),
            territory("CA", 1, false),
            territory("US", 1, true),
            territory("GB", 44, true),
        ])
        .unwrap();

        assert_eq!(vec!["US", "BS", "CA"], regions(index.by_calling_code(1)));
        assert_eq!("US", index.region_code_for_country_code(1));
        assert_eq!(vec!["GB"], regions(index.by_calling_code(44)));
    }

    #[test]
    fn lookups_that_miss_are_empty() {
        let index = TerritoryIndex::new([territory("GB", 44, true)]).unwrap();
        assert!(index.by_region("US").is_none());
        assert!(index.by_calling_code(1).is_empty());
        assert!(index.regions_sharing_calling_code(1).is_empty());
        assert!(!index.has_calling_code(1));
        assert_eq!("ZZ", index.region_code_for_country_code(1));
    }

    #[test]
    fn regions_sharing_calling_code() {
        let index = TerritoryIndex::new([
            territory("RU", 7, true),
            territory("KZ", 7, false),
            territory("GB", 44, true),
        ])
        .unwrap();
        let sharing = index.regions_sharing_calling_code(7);
        assert_eq!(2, sharing.len());
        assert!(sharing.contains("RU"));
        assert!(sharing.contains("KZ"));
        assert_eq!(vec![7, 44], index.supported_calling_codes().collect::<Vec<_>>());
        assert_eq!("KZ", index.by_region("KZ").unwrap().region_code);
    }

    #[test]
    fn duplicate_region_is_rejected() {
        let err = TerritoryIndex::new([territory("GB", 44, true), territory("GB", 44, false)])
            .unwrap_err();
        assert_eq!(DuplicateRegionError("GB".to_owned()), err);
    }
}
