//! 演示数据
//!
//! 仅在 games 表为空时写入，整个过程在一个事务中完成。

use sea_orm::*;

use crate::entity::prelude::*;
use crate::entity::{belonging, game_lists, games};

struct SeedGame {
    title: &'static str,
    year: i32,
    genre: &'static str,
    platforms: &'static str,
    score: f64,
    short_description: &'static str,
}

const SEED_GAMES: &[SeedGame] = &[
    SeedGame {
        title: "Mass Effect Trilogy",
        year: 2012,
        genre: "Role-playing (RPG), Shooter",
        platforms: "XBox, Playstation, PC",
        score: 4.8,
        short_description: "A sci-fi epic across three games and one galaxy.",
    },
    SeedGame {
        title: "Red Dead Redemption 2",
        year: 2018,
        genre: "Role-playing (RPG), Adventure",
        platforms: "XBox, Playstation, PC",
        score: 4.7,
        short_description: "An outlaw's story at the end of the frontier era.",
    },
    SeedGame {
        title: "The Witcher 3: Wild Hunt",
        year: 2015,
        genre: "Role-playing (RPG), Adventure",
        platforms: "XBox, Playstation, PC",
        score: 4.7,
        short_description: "A monster hunter searches for his adopted daughter.",
    },
    SeedGame {
        title: "Super Mario World",
        year: 1990,
        genre: "Platform",
        platforms: "Super Ness, PC",
        score: 4.7,
        short_description: "Mario and Yoshi explore Dinosaur Land.",
    },
    SeedGame {
        title: "Hollow Knight",
        year: 2017,
        genre: "Platform",
        platforms: "XBox, Playstation, PC",
        score: 4.6,
        short_description: "A silent knight descends into a ruined insect kingdom.",
    },
    SeedGame {
        title: "Celeste",
        year: 2018,
        genre: "Platform",
        platforms: "XBox, Playstation, PC",
        score: 4.6,
        short_description: "A climb up a mountain and through one's own anxiety.",
    },
];

/// 演示列表：名称以及成员在 SEED_GAMES 中的下标
const SEED_LISTS: &[(&str, &[usize])] = &[
    ("Aventura e RPG", &[0, 1, 2]),
    ("Jogos de plataforma", &[3, 4, 5]),
];

/// 写入演示数据，返回写入的游戏数量；目录非空时不做任何事
pub async fn seed_demo_catalog(db: &DatabaseConnection) -> Result<usize, DbErr> {
    let txn = db.begin().await?;

    if Games::find().count(&txn).await? > 0 {
        log::info!("目录已有数据，跳过演示数据");
        return Ok(0);
    }

    let now = chrono::Utc::now().timestamp();
    let mut game_ids = Vec::with_capacity(SEED_GAMES.len());

    for seed in SEED_GAMES {
        let game = games::ActiveModel {
            id: NotSet,
            title: Set(seed.title.to_owned()),
            game_year: Set(Some(seed.year)),
            genre: Set(Some(seed.genre.to_owned())),
            platforms: Set(Some(seed.platforms.to_owned())),
            score: Set(Some(seed.score)),
            img_url: Set(None),
            short_description: Set(Some(seed.short_description.to_owned())),
            long_description: Set(None),
        }
        .insert(&txn)
        .await?;
        game_ids.push(game.id);
    }

    for &(name, members) in SEED_LISTS {
        let list = game_lists::ActiveModel {
            id: NotSet,
            name: Set(name.to_owned()),
        }
        .insert(&txn)
        .await?;

        let links: Vec<belonging::ActiveModel> = members
            .iter()
            .enumerate()
            .map(|(position, &index)| belonging::ActiveModel {
                game_id: Set(game_ids[index]),
                list_id: Set(list.id),
                position: Set(position as i32),
                created_at: Set(Some(now)),
            })
            .collect();

        Belonging::insert_many(links)
            .exec_without_returning(&txn)
            .await?;
    }

    txn.commit().await?;

    log::info!(
        "已写入演示数据: {} 个游戏, {} 个列表",
        game_ids.len(),
        SEED_LISTS.len()
    );
    Ok(game_ids.len())
}
