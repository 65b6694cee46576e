//! Seed fixtures for first launch.
//!
//! When the durable store has no item or moment snapshot yet, the catalog
//! is populated with this fixed community data so the app never opens onto
//! an empty feed. Fixture counters intentionally carry community totals
//! larger than the tracked appreciation/comment sets; the store's relative
//! toggle semantics preserve those offsets.

use crate::types::{
    Category, Comment, ItemStatus, Moment, MomentRole, ShareItem,
};

const DAY: i64 = 86_400;
const HOUR: i64 = 3_600;

fn comment(id: &str, user_id: &str, username: &str, text: &str, created_at: i64) -> Comment {
    Comment {
        id: id.to_string(),
        user_id: user_id.to_string(),
        username: username.to_string(),
        text: text.to_string(),
        created_at,
    }
}

/// The six fixture listings, most recent first by catalog convention.
pub fn seed_items(now: i64) -> Vec<ShareItem> {
    vec![
        ShareItem {
            id: "item_1".to_string(),
            user_id: "seed_1".to_string(),
            username: "maya_gives".to_string(),
            user_avatar: None,
            title: "Vintage Fiction Collection".to_string(),
            description: "12 well-loved novels including classics by Austen, Bronte, and \
                          Hemingway. Some spine wear but all pages intact."
                .to_string(),
            story: "These books carried me through college and many quiet evenings. Now that \
                    I've moved to a smaller place, I want them to bring the same joy to \
                    someone else."
                .to_string(),
            category: Category::Books,
            condition: "Good - minor wear".to_string(),
            pickup_info: "Available evenings after 6pm, downtown area".to_string(),
            images: vec![],
            location: "Downtown".to_string(),
            appreciations: 24,
            appreciated_by: vec!["seed_2".to_string(), "seed_3".to_string()],
            comment_count: 3,
            comments: vec![
                comment(
                    "c1",
                    "seed_2",
                    "alex_shares",
                    "Beautiful collection! Love the classics.",
                    now - HOUR,
                ),
                comment(
                    "c2",
                    "seed_3",
                    "priya_free",
                    "My daughter would love the Austen novels!",
                    now - HOUR / 2,
                ),
            ],
            requests: vec![],
            status: ItemStatus::Available,
            created_at: now - 2 * DAY,
        },
        ShareItem {
            id: "item_2".to_string(),
            user_id: "seed_2".to_string(),
            username: "alex_shares".to_string(),
            user_avatar: None,
            title: "Kids Bicycle - Age 6-8".to_string(),
            description: "Blue and white 20-inch bike with training wheels. Recently tuned up \
                          with new brake pads."
                .to_string(),
            story: "My son outgrew this bike faster than I expected. It taught him to ride \
                    and I hope it does the same for another child."
                .to_string(),
            category: Category::Sports,
            condition: "Great - recently serviced".to_string(),
            pickup_info: "Weekends preferred, can help load into car".to_string(),
            images: vec![],
            location: "Westside".to_string(),
            appreciations: 38,
            appreciated_by: vec![
                "seed_3".to_string(),
                "seed_4".to_string(),
                "seed_5".to_string(),
            ],
            comment_count: 5,
            comments: vec![comment(
                "c3",
                "seed_4",
                "sam_reuse",
                "This is so generous! My niece needs exactly this.",
                now - 2 * HOUR,
            )],
            requests: vec![],
            status: ItemStatus::Available,
            created_at: now - DAY,
        },
        ShareItem {
            id: "item_3".to_string(),
            user_id: "seed_3".to_string(),
            username: "priya_free".to_string(),
            user_avatar: None,
            title: "Standing Desk Converter".to_string(),
            description: "Adjustable standing desk riser, fits on any table. Holds monitor \
                          and keyboard. Gas spring mechanism."
                .to_string(),
            story: "Switching to a full standing desk so this converter needs a new home. It \
                    helped me so much with back pain during WFH."
                .to_string(),
            category: Category::Furniture,
            condition: "Excellent".to_string(),
            pickup_info: "Available anytime, ground floor access".to_string(),
            images: vec![],
            location: "Midtown".to_string(),
            appreciations: 45,
            appreciated_by: vec!["seed_1".to_string(), "seed_4".to_string()],
            comment_count: 8,
            comments: vec![comment(
                "c4",
                "seed_1",
                "maya_gives",
                "Wish I saw this sooner!",
                now - HOUR - HOUR / 2,
            )],
            requests: vec![],
            status: ItemStatus::Available,
            created_at: now - 3 * DAY,
        },
        ShareItem {
            id: "item_4".to_string(),
            user_id: "seed_4".to_string(),
            username: "sam_reuse".to_string(),
            user_avatar: None,
            title: "Winter Coat - Women's M".to_string(),
            description: "Warm down parka in forest green, women's medium. Hood with faux fur \
                          trim. Worn two seasons."
                .to_string(),
            story: "I received a new coat as a gift and want to make sure this one keeps \
                    someone else warm this winter."
                .to_string(),
            category: Category::Clothes,
            condition: "Very good".to_string(),
            pickup_info: "Can meet at central station anytime".to_string(),
            images: vec![],
            location: "East Village".to_string(),
            appreciations: 19,
            appreciated_by: vec!["seed_1".to_string(), "seed_5".to_string()],
            comment_count: 2,
            comments: vec![],
            requests: vec![],
            status: ItemStatus::Available,
            created_at: now - 4 * DAY,
        },
        ShareItem {
            id: "item_5".to_string(),
            user_id: "seed_5".to_string(),
            username: "nina_kind".to_string(),
            user_avatar: None,
            title: "Instant Pot Duo 6qt".to_string(),
            description: "Multi-use pressure cooker with all accessories, manual, and recipe \
                          booklet included. Works perfectly."
                .to_string(),
            story: "Upgraded to a larger model for my growing family. This little pot made \
                    hundreds of meals and has lots of life left."
                .to_string(),
            category: Category::Kitchen,
            condition: "Good - fully functional".to_string(),
            pickup_info: "Available mornings, please message first".to_string(),
            images: vec![],
            location: "Northside".to_string(),
            appreciations: 31,
            appreciated_by: vec![
                "seed_2".to_string(),
                "seed_3".to_string(),
                "seed_4".to_string(),
            ],
            comment_count: 4,
            comments: vec![comment(
                "c5",
                "seed_2",
                "alex_shares",
                "Perfect for a college student!",
                now - 2 * HOUR - HOUR / 2,
            )],
            requests: vec![],
            status: ItemStatus::Available,
            created_at: now - 5 * DAY,
        },
        ShareItem {
            id: "item_6".to_string(),
            user_id: "seed_1".to_string(),
            username: "maya_gives".to_string(),
            user_avatar: None,
            title: "LEGO Creator Set".to_string(),
            description: "3-in-1 Creator set, over 500 pieces. All pieces accounted for, \
                          includes original box and instructions."
                .to_string(),
            story: "My kids built this a dozen times and moved on to bigger sets. Time for \
                    another family to enjoy the creativity."
                .to_string(),
            category: Category::Toys,
            condition: "Complete - all pieces".to_string(),
            pickup_info: "Porch pickup available".to_string(),
            images: vec![],
            location: "Suburb Heights".to_string(),
            appreciations: 52,
            appreciated_by: vec![
                "seed_3".to_string(),
                "seed_4".to_string(),
                "seed_5".to_string(),
            ],
            comment_count: 6,
            comments: vec![],
            requests: vec![],
            status: ItemStatus::Available,
            created_at: now - 8 * HOUR,
        },
    ]
}

/// The three fixture moments, most recent first.
pub fn seed_moments(now: i64) -> Vec<Moment> {
    vec![
        Moment {
            id: "moment_1".to_string(),
            user_id: "seed_3".to_string(),
            username: "priya_free".to_string(),
            user_avatar: None,
            item_id: "seed_item".to_string(),
            item_title: "Children's Book Set".to_string(),
            caption: "My daughter was thrilled to receive these books! She started reading \
                      immediately. Thank you to this amazing community!"
                .to_string(),
            image_uri: None,
            role: MomentRole::Receiver,
            appreciations: 15,
            appreciated_by: vec!["seed_1".to_string(), "seed_2".to_string()],
            created_at: now - DAY,
        },
        Moment {
            id: "moment_2".to_string(),
            user_id: "seed_1".to_string(),
            username: "maya_gives".to_string(),
            user_avatar: None,
            item_id: "seed_item2".to_string(),
            item_title: "Ceramic Plant Pots".to_string(),
            caption: "So happy these pots found a new home with someone who truly loves \
                      plants. Seeing them put to good use brings me joy!"
                .to_string(),
            image_uri: None,
            role: MomentRole::Giver,
            appreciations: 22,
            appreciated_by: vec!["seed_4".to_string(), "seed_5".to_string()],
            created_at: now - 3 * DAY,
        },
        Moment {
            id: "moment_3".to_string(),
            user_id: "seed_4".to_string(),
            username: "sam_reuse".to_string(),
            user_avatar: None,
            item_id: "seed_item3".to_string(),
            item_title: "Guitar for Beginners".to_string(),
            caption: "First chords on my new (to me) guitar! Never thought I'd start \
                      learning at 30. Grateful for this generous gift."
                .to_string(),
            image_uri: None,
            role: MomentRole::Receiver,
            appreciations: 31,
            appreciated_by: vec![
                "seed_1".to_string(),
                "seed_2".to_string(),
                "seed_3".to_string(),
            ],
            created_at: now - 5 * DAY,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_six_seed_items() {
        let items = seed_items(1_700_000_000);
        assert_eq!(items.len(), 6);

        let first = &items[0];
        assert_eq!(first.id, "item_1");
        assert_eq!(first.title, "Vintage Fiction Collection");
        assert_eq!(first.appreciations, 24);
        assert_eq!(first.appreciated_by.len(), 2);
        assert_eq!(first.comments.len(), 2);
        assert_eq!(first.status, ItemStatus::Available);
    }

    #[test]
    fn test_seed_items_start_without_requests() {
        for item in seed_items(1_700_000_000) {
            assert!(item.requests.is_empty());
            assert_eq!(item.status, ItemStatus::Available);
        }
    }

    #[test]
    fn test_three_seed_moments() {
        let moments = seed_moments(1_700_000_000);
        assert_eq!(moments.len(), 3);
        assert_eq!(moments[0].id, "moment_1");
        assert_eq!(moments[0].role, MomentRole::Receiver);
        assert_eq!(moments[1].role, MomentRole::Giver);
    }

    #[test]
    fn test_seed_timestamps_precede_now() {
        let now = 1_700_000_000;
        for item in seed_items(now) {
            assert!(item.created_at < now);
            for c in &item.comments {
                assert!(c.created_at < now);
            }
        }
        for moment in seed_moments(now) {
            assert!(moment.created_at < now);
        }
    }
}
