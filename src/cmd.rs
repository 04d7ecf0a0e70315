use clap::Subcommand;

use rivalsapi::{ListQuery, Platform, RivalsApi, SeasonKey};

#[derive(Subcommand, Debug)]
pub enum Cmd {
    /// Show one hero and their abilities
    Hero { hero: String },
    /// List every hero
    Heroes,
    /// Show a hero's global stats
    Stats { hero: String },
    /// Show the top players of a hero
    Leaderboard {
        hero: String,
        #[arg(long, default_value = "pc")]
        platform: Platform,
        #[arg(long, default_value_t = 10)]
        top: usize,
        /// Order by KDA instead of the API ranking
        #[arg(long)]
        by_kda: bool,
    },
    /// List a hero's costumes
    Costumes { hero: String },
    Achievements {
        #[arg(long)]
        search: Option<String>,
        #[arg(long)]
        page: Option<u32>,
        #[arg(long)]
        limit: Option<u32>,
        #[arg(long)]
        category: Option<String>,
    },
    Items {
        #[arg(long)]
        search: Option<String>,
        #[arg(long)]
        page: Option<u32>,
        #[arg(long)]
        limit: Option<u32>,
        #[arg(long = "type")]
        item_type: Option<String>,
        #[arg(long)]
        quality: Option<String>,
    },
    Battlepass {
        season: f64,
        /// Look up a single tier item by name
        #[arg(long)]
        find: Option<String>,
    },
    Maps {
        #[arg(long)]
        page: Option<u32>,
        #[arg(long)]
        limit: Option<u32>,
        #[arg(long)]
        mode: Option<String>,
    },
}

fn list_query(search: Option<String>, page: Option<u32>, limit: Option<u32>) -> ListQuery {
    ListQuery {
        search,
        page,
        limit,
    }
}

fn not_found(what: &str) {
    println!("no {what} found");
}

impl Cmd {
    pub async fn run<C: RivalsApi + Sync>(self, client: &C) -> anyhow::Result<()> {
        match self {
            Cmd::Hero { hero } => match client.hero(&hero).await? {
                Some(hero) => {
                    println!(
                        "{} ({}) | {} | {}",
                        hero.name, hero.real_name, hero.role, hero.attack_type
                    );
                    println!("{}", hero.bio);
                    for ability in &hero.abilities {
                        println!(
                            " {} | {}",
                            ability.ability_type,
                            ability.name.as_deref().unwrap_or("-")
                        );
                    }
                }
                None => not_found("hero"),
            },
            Cmd::Heroes => match client.heroes().await? {
                Some(heroes) => {
                    println!("Id | Role | Name");
                    for hero in heroes {
                        println!(" {} | {} | {}", hero.id, hero.role, hero.name);
                    }
                }
                None => not_found("heroes"),
            },
            Cmd::Stats { hero } => match client.hero_stats(&hero).await? {
                Some(stats) => {
                    println!("{}: {} matches", stats.hero_name, stats.matches);
                    println!(" win rate {:.1}%", stats.win_rate() * 100.0);
                    println!(" kda {:.2}", stats.kda());
                }
                None => not_found("stats"),
            },
            Cmd::Leaderboard {
                hero,
                platform,
                top,
                by_kda,
            } => match client.hero_leaderboard(&hero, platform).await? {
                Some(board) => {
                    let players = if by_kda {
                        board.sort_by_kda()
                    } else {
                        board.players.iter().collect()
                    };
                    println!("Wins | KDA | Player Name");
                    for player in players.into_iter().take(top) {
                        println!(" {} | {:.2} | {}", player.wins, player.kda(), player.info.name);
                    }
                }
                None => not_found("leaderboard"),
            },
            Cmd::Costumes { hero } => match client.hero_costumes(&hero).await? {
                Some(costumes) => {
                    println!("Quality | Costume");
                    for costume in costumes {
                        println!(" {} | {}", costume.quality, costume.name);
                    }
                }
                None => not_found("costumes"),
            },
            Cmd::Achievements {
                search,
                page,
                limit,
                category,
            } => match client.achievements(&list_query(search, page, limit)).await? {
                Some(list) => {
                    let achievements = match &category {
                        Some(category) => list.filter_by_category(category),
                        None => list.achievements.iter().collect(),
                    };
                    println!("Points | Achievement");
                    for achievement in &achievements {
                        println!(" {} | {}", achievement.points, achievement.name);
                    }
                    println!(
                        "{} of {} points",
                        rivalsapi::points(&achievements),
                        list.total_points()
                    );
                }
                None => not_found("achievements"),
            },
            Cmd::Items {
                search,
                page,
                limit,
                item_type,
                quality,
            } => match client.items(&list_query(search, page, limit)).await? {
                Some(list) => {
                    let mut items = match &item_type {
                        Some(item_type) => list.filter_by_type(item_type),
                        None => list.items.iter().collect(),
                    };
                    if let Some(quality) = &quality {
                        items.retain(|i| i.has_quality(quality));
                    }
                    println!("Quality | Type | Item");
                    for item in items {
                        println!(" {} | {} | {}", item.quality, item.item_type, item.name);
                    }
                }
                None => not_found("items"),
            },
            Cmd::Battlepass { season, find } => {
                match client.battlepass(SeasonKey::from(season)).await? {
                    Some(pass) => match find {
                        Some(name) => match pass.find_item(&name) {
                            Some(item) => {
                                println!("{} | {} | {}", item.name, item.cost, item.image_url())
                            }
                            None => not_found("battle pass item"),
                        },
                        None => {
                            println!("{}", pass.season_name);
                            println!("Free:");
                            for item in pass.free_items() {
                                println!(" {}", item.name);
                            }
                            println!("Premium:");
                            for item in pass.premium_items() {
                                println!(" {}", item.name);
                            }
                        }
                    },
                    None => not_found("battle pass"),
                }
            }
            Cmd::Maps { page, limit, mode } => {
                match client.maps(&list_query(None, page, limit)).await? {
                    Some(list) => {
                        let maps = match &mode {
                            Some(mode) => list.filter_by_game_mode(mode),
                            None => list.maps.iter().collect(),
                        };
                        println!("Mode | Competitive | Map");
                        for map in maps {
                            println!(
                                " {} | {} | {}",
                                map.game_mode, map.is_competitive, map.full_name
                            );
                        }
                    }
                    None => not_found("maps"),
                }
            }
        }

        Ok(())
    }
}
